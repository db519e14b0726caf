//! Featured game catalog for the landing page.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// How hard a game is to pick up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Badge modifier class for the difficulty chip.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Easy => "badge badge--easy",
            Self::Medium => "badge badge--medium",
            Self::Hard => "badge badge--hard",
        }
    }
}

/// One card on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturedGame {
    pub name: &'static str,
    pub author: &'static str,
    pub players: &'static str,
    pub duration: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub link: &'static str,
}

pub const FEATURED_GAMES: &[FeaturedGame] = &[
    FeaturedGame {
        name: "Codenames",
        author: "Vlaada Chvátil",
        players: "2-8 players",
        duration: "15 min",
        category: "Word Game",
        difficulty: Difficulty::Easy,
        description: "A clever team-based word game where spies give one-word clues to identify their team's agents.",
        link: "/games/codenames",
    },
    FeaturedGame {
        name: "Jackbox Party Pack",
        author: "Jackbox Games",
        players: "3-8 players",
        duration: "15-30 min",
        category: "Party Game",
        difficulty: Difficulty::Easy,
        description: "A collection of hilarious party games that everyone can play using their phones as controllers.",
        link: "/games/jackbox-party-pack",
    },
    FeaturedGame {
        name: "Among Us",
        author: "InnerSloth",
        players: "4-15 players",
        duration: "15-45 min",
        category: "Social Deduction",
        difficulty: Difficulty::Medium,
        description: "Work together to complete tasks while trying to identify the impostor among your crew.",
        link: "/games/among-us",
    },
    FeaturedGame {
        name: "Wavelength",
        author: "Wolfgang Warsch",
        players: "2-12 players",
        duration: "45 min",
        category: "Party Game",
        difficulty: Difficulty::Medium,
        description: "A telepathic party game where teams try to read minds using a spectrum of concepts.",
        link: "/games/wavelength",
    },
    FeaturedGame {
        name: "One Night Ultimate Werewolf",
        author: "Ted Alspach",
        players: "3-10 players",
        duration: "10 min",
        category: "Social Deduction",
        difficulty: Difficulty::Medium,
        description: "A fast-paced game where villagers must identify the werewolves before dawn breaks.",
        link: "/games/one-night-werewolf",
    },
    FeaturedGame {
        name: "Telestrations",
        author: "USAopoly",
        players: "4-8 players",
        duration: "30 min",
        category: "Drawing Game",
        difficulty: Difficulty::Easy,
        description: "The hilarious game of sketching and guessing that combines telephone with Pictionary.",
        link: "/games/telestrations",
    },
    FeaturedGame {
        name: "Secret Hitler",
        author: "Mike Boxleiter",
        players: "5-10 players",
        duration: "30-45 min",
        category: "Social Deduction",
        difficulty: Difficulty::Hard,
        description: "A dramatic game of political intrigue and deduction in 1930s Germany.",
        link: "/games/secret-hitler",
    },
    FeaturedGame {
        name: "Coup",
        author: "Rikki Tahta",
        players: "2-6 players",
        duration: "15 min",
        category: "Bluffing",
        difficulty: Difficulty::Medium,
        description: "A game of manipulation and mayhem where you must bluff your way to power.",
        link: "/games/coup",
    },
    FeaturedGame {
        name: "Just One",
        author: "Ludovic Roudy",
        players: "3-8 players",
        duration: "20 min",
        category: "Word Game",
        difficulty: Difficulty::Easy,
        description: "A cooperative word game where players give one-word clues to help guess the mystery word.",
        link: "/games/just-one",
    },
];

/// Headline numbers shown under the catalog: (value, label).
pub const SITE_STATS: &[(&str, &str)] = &[
    ("500+", "Games Available"),
    ("10K+", "Game Nights Hosted"),
    ("50K+", "Happy Players"),
];
