use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelTier {
    pub name: &'static str,
    pub min_points: i64,
    pub color: &'static str,
}

pub const LEVELS: [LevelTier; 5] = [
    LevelTier { name: "Novice", min_points: 0, color: "#6b7280" },
    LevelTier { name: "Contributor", min_points: 100, color: "#00d4ff" },
    LevelTier { name: "Expert", min_points: 300, color: "#a855f7" },
    LevelTier { name: "Master", min_points: 600, color: "#ffd700" },
    LevelTier { name: "Legend", min_points: 1000, color: "#f472b6" },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub current: LevelTier,
    pub next: Option<LevelTier>,
    /// Percentage toward the next tier; 100 at the top.
    pub progress: f64,
}

/// Highest tier whose minimum the points meet.
pub fn level_info(points: i64) -> LevelInfo {
    let idx = LEVELS
        .iter()
        .rposition(|tier| points >= tier.min_points)
        .unwrap_or(0);
    let current = LEVELS[idx];
    let next = LEVELS.get(idx + 1).copied();
    let progress = match next {
        Some(next_tier) => {
            (points - current.min_points) as f64
                / (next_tier.min_points - current.min_points) as f64
                * 100.0
        }
        None => 100.0,
    };
    LevelInfo {
        current,
        next,
        progress,
    }
}
