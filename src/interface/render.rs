use crate::models::{DietPlan, PinnedPlan, WeekPlan};
use crate::shopping::{display_quantity, item_key, ChecklistState, GroupedShoppingList, ListEstimate};

/// Display the day templates of a diet plan.
pub fn display_day_plans(plan: &DietPlan) {
    println!();
    println!("=== Diet Plan ===");
    println!();

    let max_id_len = plan.days.iter().map(|d| d.id.len()).max().unwrap_or(4);

    for day in &plan.days {
        let meal_names: Vec<&str> = day.meals.iter().map(|m| m.name.as_str()).collect();
        println!(
            "  {:<width$}  {} ({})",
            day.id,
            day.name,
            meal_names.join(", "),
            width = max_id_len
        );
    }
    println!();
}

/// Display the week plan, one block per weekday.
pub fn display_week_plan(week: &WeekPlan) {
    println!();
    println!("=== Week Plan ===");

    for (weekday, meals) in week.iter() {
        println!();
        println!("{}", weekday);
        if meals.is_empty() {
            println!("  (sin comidas)");
            continue;
        }
        for (i, meal) in meals.iter().enumerate() {
            println!("  {}. {}", i + 1, meal.name);
            for (j, ingredient) in meal.ingredients.iter().enumerate() {
                println!("      {}. {} - {}", j + 1, ingredient.name, ingredient.quantity);
            }
        }
    }
    println!();
}

/// Display the grouped shopping list with checkmarks and, optionally, prices.
pub fn display_shopping_list(
    list: &GroupedShoppingList,
    checklist: &ChecklistState,
    prices: Option<(&ListEstimate, &str)>,
    show_sources: bool,
) {
    if list.is_empty() {
        println!("Shopping list is empty. Assign days to the week plan first.");
        return;
    }

    println!();
    println!("=== Shopping List ===");

    let mut checked = 0;
    let mut total = 0;

    for (category, items) in list {
        println!();
        println!("{} ({})", category, items.len());

        let max_name_len = items.iter().map(|i| i.name.chars().count()).max().unwrap_or(10);

        for item in items {
            let key = item_key(*category, item);
            let mark = if checklist.is_checked(&key) {
                checked += 1;
                "x"
            } else {
                " "
            };
            total += 1;

            let mut line = format!(
                "  [{}] {:<width$}  {}",
                mark,
                item.name,
                display_quantity(item),
                width = max_name_len
            );

            if let Some(estimate) = prices.and_then(|(e, _)| e.get(&item.normalized_name)) {
                match estimate.price {
                    Some(price) => line.push_str(&format!("  ${:.2}  ({})", price, estimate.explanation)),
                    None => line.push_str(&format!("  -  ({})", estimate.explanation)),
                }
            }

            println!("{}", line);

            if show_sources {
                let used_in: Vec<String> = item
                    .sources
                    .iter()
                    .map(|s| format!("{} {}", s.day, s.meal))
                    .collect();
                println!("        {}", used_in.join("; "));
            }
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Checked: {}/{}", checked, total);
    if let Some((estimate, currency)) = prices {
        println!("Estimated total: {:.2} {}", estimate.total, currency);
        if estimate.unpriced > 0 {
            println!("Items without price: {}", estimate.unpriced);
        }
    }
    println!();
}

/// Display saved plans, marking the active one.
pub fn display_pinned(pinned: &[PinnedPlan], current: Option<&str>) {
    if pinned.is_empty() {
        println!("No pinned plans.");
        return;
    }

    for plan in pinned {
        let marker = if current == Some(plan.id.as_str()) { "*" } else { " " };
        println!(
            "{} {:<8} {} ({} days)",
            marker,
            plan.id,
            plan.name,
            plan.plan.days.len()
        );
    }
}
