// src/view_models.rs

/// Row of the level list.
#[derive(Clone, Debug)]
pub struct LevelRow {
    pub index: usize,  // 0-based en la tabla de niveles
    pub number: usize, // número "humano" (1,2,3…)
    pub title: String,
    pub unlocked: bool,
}

/// Card of the crownfish gallery.
#[derive(Clone, Debug)]
pub struct CollectionCard {
    pub title: String,
    pub fish_index: usize,
    pub unlocked: bool,
}

impl LevelRow {
    pub fn label(&self) -> String {
        if self.unlocked {
            format!("{}.  {}", self.number, self.title)
        } else {
            format!("{}.  {}  🔒", self.number, self.title)
        }
    }
}

impl CollectionCard {
    // Variante de pez por carta; sustituye a los cinco sprites del original.
    pub fn icon(&self) -> &'static str {
        if !self.unlocked {
            return "🔒";
        }
        match self.fish_index {
            0 => "🐟",
            1 => "🐠",
            2 => "🐡",
            3 => "🦈",
            _ => "👑",
        }
    }
}
