// src/data.rs

use crate::model::{CollectionFish, FishFact, Level};

/// Carga la tabla de niveles desde el YAML embebido
pub fn read_levels_embedded() -> Vec<Level> {
    let file_content = include_str!("data/levels.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear la tabla de niveles YAML")
}

pub fn read_facts_embedded() -> Vec<FishFact> {
    let file_content = include_str!("data/fish_facts.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear la tabla de facts YAML")
}

pub fn read_collection_embedded() -> Vec<CollectionFish> {
    let file_content = include_str!("data/collection.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear la colección YAML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_table_has_fifteen_levels_of_three_tasks() {
        let levels = read_levels_embedded();
        assert_eq!(levels.len(), 15);
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(level.number, i + 1);
            assert_eq!(level.tasks.len(), 3, "level {} task count", level.number);
            for task in &level.tasks {
                assert!(!task.grid.is_empty());
                assert!(!task.answer.trim().is_empty());
            }
        }
    }

    #[test]
    fn level_one_answers_match_the_known_sequence() {
        let levels = read_levels_embedded();
        let answers: Vec<&str> = levels[0].tasks.iter().map(|t| t.answer.as_str()).collect();
        assert_eq!(answers, vec!["20", "15", "24"]);
        assert_eq!(levels[0].title, "Frozen Patterns");
    }

    #[test]
    fn facts_and_collection_tables_parse() {
        let facts = read_facts_embedded();
        assert_eq!(facts.len(), 10);
        assert!(facts.iter().all(|f| !f.id.is_empty()));

        let collection = read_collection_embedded();
        assert_eq!(collection.len(), 15);
        assert!(collection.iter().all(|c| c.fish_index <= 4));
    }
}
