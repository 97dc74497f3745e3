use std::fmt::Write;

use crate::domain::recipe::entities::Recipe;

/// Printer friendly plain text version of a recipe.
pub fn render_printable(recipe: &Recipe, author_username: &str) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", recipe.name);
    let _ = writeln!(out, "by {author_username}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Cooking time: {} min", recipe.cooking_time);
    let _ = writeln!(
        out,
        "Nutrition: {} kcal | protein {} g | carbs {} g | fat {} g",
        format_amount(recipe.calories),
        format_amount(recipe.protein),
        format_amount(recipe.carbs),
        format_amount(recipe.fat),
    );

    let tags = recipe.tag_list();
    if !tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", tags.join(", "));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Ingredients");
    for line in recipe.ingredient_lines() {
        let _ = writeln!(out, "- {line}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Instructions");
    let _ = writeln!(out, "{}", recipe.instructions.trim());

    out
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::sample_recipe;
    use uuid::Uuid;

    #[test]
    fn amounts_drop_useless_decimals() {
        assert_eq!(format_amount(400.0), "400");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.333), "0.33");
    }

    #[test]
    fn renders_every_section() {
        let mut recipe = sample_recipe(Uuid::new_v4(), "Pancakes", "breakfast, sweet");
        recipe.protein = 12.5;

        let text = render_printable(&recipe, "alice");

        let expected = "Pancakes\n\
                        by alice\n\
                        \n\
                        Cooking time: 20 min\n\
                        Nutrition: 400 kcal | protein 12.5 g | carbs 50 g | fat 10 g\n\
                        Tags: breakfast, sweet\n\
                        \n\
                        Ingredients\n\
                        - flour\n\
                        - eggs\n\
                        \n\
                        Instructions\n\
                        Mix and cook.\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn tags_line_is_omitted_without_tags() {
        let recipe = sample_recipe(Uuid::new_v4(), "Toast", "");
        assert!(!render_printable(&recipe, "bob").contains("Tags:"));
    }
}
