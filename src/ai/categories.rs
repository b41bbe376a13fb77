//! Topic categories that narrow what an icebreaker question is about.

use std::fmt;

use rand::Rng;

/// Closed set of topics an icebreaker question can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    HypotheticalSuperpowers,
    FoodAndCooking,
    TravelAndAdventure,
    ChildhoodNostalgia,
    EntertainmentAndMedia,
    RandomFunPreferences,
    DreamScenarios,
    UnpopularOpinions,
    BucketList,
    WorkplaceQuirks,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HypotheticalSuperpowers,
        Category::FoodAndCooking,
        Category::TravelAndAdventure,
        Category::ChildhoodNostalgia,
        Category::EntertainmentAndMedia,
        Category::RandomFunPreferences,
        Category::DreamScenarios,
        Category::UnpopularOpinions,
        Category::BucketList,
        Category::WorkplaceQuirks,
    ];

    /// The descriptor embedded in the prompt.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::HypotheticalSuperpowers => "hypothetical superpowers or abilities",
            Category::FoodAndCooking => "food and cooking experiences",
            Category::TravelAndAdventure => "travel and adventure",
            Category::ChildhoodNostalgia => "childhood nostalgia",
            Category::EntertainmentAndMedia => "entertainment and media",
            Category::RandomFunPreferences => "random fun preferences",
            Category::DreamScenarios => "dream scenarios",
            Category::UnpopularOpinions => "unpopular opinions (light-hearted)",
            Category::BucketList => "bucket list items",
            Category::WorkplaceQuirks => "workplace and productivity quirks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draw one category uniformly at random from [`Category::ALL`].
pub fn pick_category<R: Rng>(rng: &mut R) -> Category {
    Category::ALL[rng.random_range(0..Category::ALL.len())]
}
