use tracing::{debug, info};

use crate::error::{PlannerError, Result};
use crate::models::{parse_diet_plan, DietPlan, Ingredient, Meal, PinnedPlan, WeekPlan, Weekday};
use crate::shopping::{build_shopping_list, current_keys, reconcile_checklist, ChecklistState, GroupedShoppingList};
use crate::state::store::{keys, StateStore};

/// Owns the persisted planner state and the operations that change it.
///
/// Every mutation is written through to the store; the shopping list is
/// always recomputed from the week plan.
pub struct PlannerStateManager<S: StateStore> {
    store: S,
    diet_plan: Option<DietPlan>,
    week_plan: WeekPlan,
    current_plan_id: Option<String>,
    pinned: Vec<PinnedPlan>,
    checklist: ChecklistState,
}

impl<S: StateStore> PlannerStateManager<S> {
    /// Load all state from the store. Absent or corrupt entries start empty.
    pub fn new(mut store: S) -> Self {
        let diet_plan = store.load(keys::DIET_PLAN);
        let week_plan = store.load(keys::WEEK_PLAN).unwrap_or_default();
        let current_plan_id = store.load(keys::CURRENT_PLAN_ID);
        let pinned = store.load(keys::PINNED_PLANS).unwrap_or_default();
        let checklist = store.load(keys::CHECKED_ITEMS).unwrap_or_default();

        Self {
            store,
            diet_plan,
            week_plan,
            current_plan_id,
            pinned,
            checklist,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn diet_plan(&self) -> Option<&DietPlan> {
        self.diet_plan.as_ref()
    }

    pub fn week_plan(&self) -> &WeekPlan {
        &self.week_plan
    }

    pub fn current_plan_id(&self) -> Option<&str> {
        self.current_plan_id.as_deref()
    }

    pub fn checklist(&self) -> &ChecklistState {
        &self.checklist
    }

    // ─────────────────────────────────────────────────────────────────────
    // Diet plans
    // ─────────────────────────────────────────────────────────────────────

    /// Validate and store an uploaded diet plan.
    pub fn upload_diet_plan(&mut self, content: &str) -> Result<&DietPlan> {
        let plan = parse_diet_plan(content)?;
        info!("loaded diet plan with {} days, {} meals", plan.days.len(), plan.meal_count());

        self.store.save(keys::DIET_PLAN, &plan)?;
        self.set_current_plan_id(None)?;
        Ok(self.diet_plan.insert(plan))
    }

    fn set_current_plan_id(&mut self, id: Option<String>) -> Result<()> {
        match &id {
            Some(id) => self.store.save(keys::CURRENT_PLAN_ID, id)?,
            None => self.store.remove(keys::CURRENT_PLAN_ID)?,
        }
        self.current_plan_id = id;
        Ok(())
    }

    pub fn pinned(&self) -> &[PinnedPlan] {
        &self.pinned
    }

    /// Save the current diet plan under a name. Returns the new pin id.
    pub fn pin_current(&mut self, name: &str) -> Result<String> {
        let plan = self.diet_plan.clone().ok_or(PlannerError::NoDietPlan)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::InvalidInput("pin name cannot be empty".to_string()));
        }

        let id = self.next_pin_id();
        self.pinned.push(PinnedPlan {
            id: id.clone(),
            name: name.to_string(),
            plan,
        });
        self.store.save(keys::PINNED_PLANS, &self.pinned)?;
        self.set_current_plan_id(Some(id.clone()))?;
        info!("pinned diet plan '{}' as {}", name, id);
        Ok(id)
    }

    fn next_pin_id(&self) -> String {
        let max = self
            .pinned
            .iter()
            .filter_map(|p| p.id.strip_prefix("plan-").and_then(|n| n.parse::<u32>().ok()))
            .max()
            .unwrap_or(0);
        format!("plan-{}", max + 1)
    }

    pub fn unpin(&mut self, id: &str) -> Result<PinnedPlan> {
        let position = self
            .pinned
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PlannerError::PinnedPlanNotFound(id.to_string()))?;
        let removed = self.pinned.remove(position);
        self.store.save(keys::PINNED_PLANS, &self.pinned)?;

        if self.current_plan_id.as_deref() == Some(id) {
            self.set_current_plan_id(None)?;
        }
        Ok(removed)
    }

    /// Make a pinned plan the current diet plan.
    pub fn use_pinned(&mut self, id: &str) -> Result<&DietPlan> {
        let plan = self
            .pinned
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.plan.clone())
            .ok_or_else(|| PlannerError::PinnedPlanNotFound(id.to_string()))?;

        self.store.save(keys::DIET_PLAN, &plan)?;
        self.set_current_plan_id(Some(id.to_string()))?;
        Ok(self.diet_plan.insert(plan))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Week plan
    // ─────────────────────────────────────────────────────────────────────

    fn save_week(&mut self) -> Result<()> {
        self.store.save(keys::WEEK_PLAN, &self.week_plan)
    }

    /// Copy a day template's meals into a weekday, replacing what was there.
    ///
    /// `day_ref` is a day id or a case-insensitive day name.
    pub fn assign_day(&mut self, weekday: Weekday, day_ref: &str) -> Result<&[Meal]> {
        let plan = self.diet_plan.as_ref().ok_or(PlannerError::NoDietPlan)?;
        let day = plan
            .day_by_id(day_ref)
            .or_else(|| plan.day_by_name(day_ref))
            .ok_or_else(|| PlannerError::DayPlanNotFound(day_ref.to_string()))?;

        debug!("assigning '{}' to {}", day.name, weekday.key());
        let meals = day.meals.clone();
        self.week_plan.set_day(weekday, meals);
        self.save_week()?;
        Ok(self.week_plan.day(weekday))
    }

    pub fn clear_day(&mut self, weekday: Weekday) -> Result<()> {
        self.week_plan.set_day(weekday, Vec::new());
        self.save_week()
    }

    pub fn clear_week(&mut self) -> Result<()> {
        self.week_plan = WeekPlan::new();
        self.save_week()
    }

    pub fn add_meal(&mut self, weekday: Weekday, meal: Meal) -> Result<()> {
        self.week_plan.day_mut(weekday).push(meal);
        self.save_week()
    }

    /// Append an ingredient to a meal (`meal_index` is zero-based).
    pub fn add_ingredient(
        &mut self,
        weekday: Weekday,
        meal_index: usize,
        ingredient: Ingredient,
    ) -> Result<()> {
        validate_ingredient(&ingredient)?;
        let meal = self.meal_mut(weekday, meal_index)?;
        meal.ingredients.push(ingredient);
        self.save_week()
    }

    /// Replace one ingredient of a meal. Returns the replaced ingredient.
    pub fn substitute_ingredient(
        &mut self,
        weekday: Weekday,
        meal_index: usize,
        ingredient_index: usize,
        ingredient: Ingredient,
    ) -> Result<Ingredient> {
        validate_ingredient(&ingredient)?;
        let meal = self.meal_mut(weekday, meal_index)?;
        let meal_name = meal.name.clone();
        let slot = meal
            .ingredients
            .get_mut(ingredient_index)
            .ok_or(PlannerError::IngredientNotFound {
                meal: meal_name,
                index: ingredient_index + 1,
            })?;
        let previous = std::mem::replace(slot, ingredient);
        self.save_week()?;
        Ok(previous)
    }

    fn meal_mut(&mut self, weekday: Weekday, meal_index: usize) -> Result<&mut Meal> {
        self.week_plan
            .day_mut(weekday)
            .get_mut(meal_index)
            .ok_or(PlannerError::MealNotFound {
                day: weekday.label().to_string(),
                index: meal_index + 1,
            })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Shopping list and checklist
    // ─────────────────────────────────────────────────────────────────────

    /// Rebuild the shopping list and prune checklist entries that no longer apply.
    pub fn shopping_list(&mut self) -> GroupedShoppingList {
        let list = build_shopping_list(&self.week_plan);
        reconcile_checklist(&mut self.store, &mut self.checklist, &list);
        list
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.checklist.is_checked(key)
    }

    /// Mark a key of the current list as checked.
    pub fn check(&mut self, key: &str) -> Result<()> {
        self.set_checked(key, true)
    }

    pub fn uncheck(&mut self, key: &str) -> Result<()> {
        self.set_checked(key, false)
    }

    pub fn toggle(&mut self, key: &str) -> Result<bool> {
        self.require_current_key(key)?;
        let checked = self.checklist.toggle(key);
        self.save_checklist()?;
        Ok(checked)
    }

    fn set_checked(&mut self, key: &str, checked: bool) -> Result<()> {
        self.require_current_key(key)?;
        self.checklist.set(key, checked);
        self.save_checklist()
    }

    fn require_current_key(&mut self, key: &str) -> Result<()> {
        let list = self.shopping_list();
        if current_keys(&list).contains(key) {
            Ok(())
        } else {
            Err(PlannerError::InvalidInput(format!("'{}' is not on the shopping list", key)))
        }
    }

    /// Check every item of the current list.
    pub fn check_all(&mut self) -> Result<usize> {
        let list = self.shopping_list();
        let keys = current_keys(&list);
        self.checklist.check_all(&keys);
        self.save_checklist()?;
        Ok(keys.len())
    }

    /// Clear the whole checklist, not only the current keys.
    pub fn uncheck_all(&mut self) -> Result<()> {
        self.checklist.uncheck_all();
        self.save_checklist()
    }

    /// Replace the checked set of the current list with `checked_keys`.
    pub fn set_checked_keys(&mut self, checked_keys: &[String]) -> Result<()> {
        let list = self.shopping_list();
        for key in current_keys(&list) {
            let checked = checked_keys.contains(&key);
            self.checklist.set(key, checked);
        }
        self.save_checklist()
    }

    /// (checked, total) for a list.
    pub fn progress(&self, list: &GroupedShoppingList) -> (usize, usize) {
        let keys = current_keys(list);
        (self.checklist.checked_count(&keys), keys.len())
    }

    fn save_checklist(&mut self) -> Result<()> {
        self.store.save(keys::CHECKED_ITEMS, &self.checklist)
    }
}

fn validate_ingredient(ingredient: &Ingredient) -> Result<()> {
    if ingredient.name.trim().is_empty() || ingredient.quantity.trim().is_empty() {
        return Err(PlannerError::InvalidInput(
            "ingredient needs a name and a quantity".to_string(),
        ));
    }
    Ok(())
}
