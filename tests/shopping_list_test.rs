use assert_float_eq::*;

use meal_planner_rs::models::{Ingredient, Meal, WeekPlan, Weekday};
use meal_planner_rs::shopping::{
    build_shopping_list, current_keys, display_quantity, Category, PriceEstimator,
};
use meal_planner_rs::state::{MemoryStore, PlannerStateManager};
use meal_planner_rs::SAMPLE_PLAN;

fn week_with(day: Weekday, ingredients: Vec<Ingredient>) -> WeekPlan {
    let mut plan = WeekPlan::new();
    plan.set_day(day, vec![Meal::new("m1", "Comida", ingredients)]);
    plan
}

fn sample_manager() -> PlannerStateManager<MemoryStore> {
    let mut manager = PlannerStateManager::new(MemoryStore::new());
    manager.upload_diet_plan(SAMPLE_PLAN).unwrap();
    manager.assign_day(Weekday::Monday, "dia-1").unwrap();
    manager.assign_day(Weekday::Tuesday, "dia-2").unwrap();
    manager.assign_day(Weekday::Wednesday, "Día 1").unwrap();
    manager
}

#[test]
fn test_apples_across_the_week() {
    let mut manager = sample_manager();
    let list = manager.shopping_list();

    let fruits = &list[&Category::Fruits];
    let apple = fruits.iter().find(|i| i.normalized_name == "manzana").unwrap();
    assert_eq!(apple.quantities.len(), 3);

    let total = apple.total_quantity.as_ref().unwrap();
    assert_float_absolute_eq!(total.value, 3.0, 1e-9);
    assert_eq!(total.unit, "pza");
    assert_eq!(display_quantity(apple), "3 pza");

    let estimate = PriceEstimator::default().estimate(apple);
    assert_float_absolute_eq!(estimate.price.unwrap(), 27.0, 1e-9);
    assert_eq!(estimate.explanation, "3 pza × 200 g ≈ 0.6 kg × 45.00 MXN/kg = 27.00 MXN");
}

#[test]
fn test_sample_plan_categories() {
    let mut manager = sample_manager();
    let list = manager.shopping_list();
    let keys = current_keys(&list);

    assert!(keys.contains("Alimentos de origen animal:pechuga de pollo"));
    assert!(keys.contains("Alimentos de origen animal:queso panela"));
    assert!(keys.contains("Verduras:cebolla"));
    assert!(keys.contains("Cereales y tubérculos:tortilla de maíz"));
    assert!(keys.contains("Grasas sin proteína:aguacate"));
    assert!(keys.contains("Otros ingredientes:miel"));

    // every group present is non-empty and sorted by name
    for items in list.values() {
        assert!(!items.is_empty());
        let names: Vec<String> = items.iter().map(|i| i.name.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}

#[test]
fn test_regeneration_is_idempotent() {
    let mut manager = sample_manager();
    let first = manager.shopping_list();
    let second = manager.shopping_list();
    assert_eq!(first, second);

    let estimator = PriceEstimator::default();
    assert_eq!(estimator.estimate_list(&first), estimator.estimate_list(&second));
}

#[test]
fn test_to_taste_poisons_total() {
    let mut plan = week_with(
        Weekday::Monday,
        vec![Ingredient::new("Sal", "1 pizca"), Ingredient::new("sal", "al gusto")],
    );
    plan.set_day(
        Weekday::Friday,
        vec![Meal::new("m2", "Cena", vec![Ingredient::new("Sal", "1 pizca")])],
    );

    let list = build_shopping_list(&plan);
    let salt = list
        .values()
        .flatten()
        .find(|i| i.normalized_name == "sal")
        .unwrap();

    assert_eq!(salt.quantities, vec!["1 pizca", "al gusto", "1 pizca"]);
    assert!(salt.total_quantity.is_none());
    assert_eq!(salt.variations, vec!["sal"]);

    let estimate = PriceEstimator::default().estimate(salt);
    assert_eq!(estimate.price, None);
    assert_eq!(estimate.explanation, "no cuantificable");
}

#[test]
fn test_preparation_variants_group_together() {
    let plan = week_with(
        Weekday::Thursday,
        vec![
            Ingredient::new("Pechuga de pollo asada", "120 g"),
            Ingredient::new("pechuga de pollo", "80 gr"),
        ],
    );

    let list = build_shopping_list(&plan);
    let chicken = &list[&Category::AnimalOrigin];
    assert_eq!(chicken.len(), 1);

    let item = &chicken[0];
    assert_eq!(item.name, "Pechuga de pollo asada");
    assert_float_absolute_eq!(item.total_quantity.as_ref().unwrap().value, 200.0, 1e-9);

    let estimate = PriceEstimator::default().estimate(item);
    assert_float_absolute_eq!(estimate.price.unwrap(), 28.0, 1e-9);
}

#[test]
fn test_list_total_sums_known_prices() {
    let mut manager = sample_manager();
    let list = manager.shopping_list();
    let estimate = PriceEstimator::default().estimate_list(&list);

    let known: f64 = estimate.items.iter().filter_map(|(_, e)| e.price).sum();
    assert_float_absolute_eq!(estimate.total, known, 0.01);
    assert!(estimate.unpriced >= 2);
    assert!(estimate.total > 27.0);
}

#[test]
fn test_empty_week_has_empty_list() {
    let list = build_shopping_list(&WeekPlan::new());
    assert!(list.is_empty());
}
