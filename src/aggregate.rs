use std::collections::BTreeMap;

use crate::model::{AggregateRow, ClassifiedRecipe, Difficulty};

/// Remark column emitted between the difficulty label and its average.
pub const AVERAGE_TOTAL_TIME_REMARK: &str = "average_total_time";

/// Mean total time per difficulty, over every recipe with a known rating.
///
/// Recipes with an unknown difficulty are excluded, and a difficulty with no
/// recipes gets no row. Rows come out in Easy/Medium/Hard order.
pub fn average_time_by_difficulty(recipes: &[ClassifiedRecipe]) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<Difficulty, (f64, usize)> = BTreeMap::new();
    for recipe in recipes {
        if recipe.difficulty == Difficulty::Unknown {
            continue;
        }
        if let Some(total) = recipe.total_time {
            let (sum, count) = groups.entry(recipe.difficulty).or_insert((0.0, 0));
            *sum += total;
            *count += 1;
        }
    }

    groups
        .into_iter()
        .map(|(difficulty, (sum, count))| AggregateRow {
            difficulty,
            average_total_time: sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;
    use serde_json::Map;

    fn classified(difficulty: Difficulty, total_time: Option<f64>) -> ClassifiedRecipe {
        ClassifiedRecipe {
            recipe: Recipe::new(Map::new()),
            difficulty,
            total_time,
        }
    }

    #[test]
    fn test_group_means() {
        let recipes = vec![
            classified(Difficulty::Easy, Some(10.0)),
            classified(Difficulty::Easy, Some(20.0)),
            classified(Difficulty::Hard, Some(70.0)),
        ];

        let rows = average_time_by_difficulty(&recipes);
        assert_eq!(
            rows,
            vec![
                AggregateRow { difficulty: Difficulty::Easy, average_total_time: 15.0 },
                AggregateRow { difficulty: Difficulty::Hard, average_total_time: 70.0 },
            ]
        );
    }

    #[test]
    fn test_unknown_recipes_are_excluded() {
        let recipes = vec![
            classified(Difficulty::Unknown, None),
            classified(Difficulty::Medium, Some(45.0)),
        ];

        let rows = average_time_by_difficulty(&recipes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].difficulty, Difficulty::Medium);
        assert_eq!(rows[0].average_total_time, 45.0);
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(average_time_by_difficulty(&[]).is_empty());
    }
}
