//! Known foods

use super::CatalogFoodItem;
use crate::models::Nutrition;

const fn food(
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    serving: &'static str,
) -> CatalogFoodItem {
    CatalogFoodItem {
        name,
        nutrition: Nutrition::new(calories, protein, carbs, fat),
        serving,
    }
}

pub static FOODS: [CatalogFoodItem; 12] = [
    food("Arroz Branco", 130.0, 2.7, 28.0, 0.3, "100g"),
    food("Feijão Preto", 132.0, 8.9, 23.7, 0.5, "100g"),
    food("Frango Grelhado", 165.0, 31.0, 0.0, 3.6, "100g"),
    food("Ovo Cozido", 155.0, 13.0, 1.1, 11.0, "1 unidade"),
    food("Banana", 89.0, 1.1, 23.0, 0.3, "1 unidade"),
    food("Maçã", 52.0, 0.3, 14.0, 0.2, "1 unidade"),
    food("Pão Integral", 247.0, 13.0, 41.0, 3.4, "100g"),
    food("Iogurte Natural", 61.0, 3.5, 4.7, 3.3, "100g"),
    food("Batata Doce", 86.0, 1.6, 20.0, 0.1, "100g"),
    food("Salmão", 208.0, 20.0, 0.0, 13.0, "100g"),
    food("Aveia", 389.0, 16.9, 66.3, 6.9, "100g"),
    food("Leite Integral", 61.0, 3.2, 4.8, 3.3, "100ml"),
];
