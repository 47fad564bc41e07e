use serde::{Deserialize, Serialize};

/// Tag a movie is listed under on the home feed.
///
/// Declaration order is significant: [`MovieCategory::ordinal`] is used as the
/// stable item id of category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovieCategory {
    PopularStreaming,
    PopularOnTv,
    PopularForRent,
    PopularInTheatres,
    NowPlayingMovies,
    NowPlayingTv,
    UpcomingToday,
    UpcomingThisWeek,
}

impl MovieCategory {
    pub const ALL: [MovieCategory; 8] = [
        MovieCategory::PopularStreaming,
        MovieCategory::PopularOnTv,
        MovieCategory::PopularForRent,
        MovieCategory::PopularInTheatres,
        MovieCategory::NowPlayingMovies,
        MovieCategory::NowPlayingTv,
        MovieCategory::UpcomingToday,
        MovieCategory::UpcomingThisWeek,
    ];

    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Family this category competes with for the selected slot.
    pub fn family(self) -> MovieCategoryFamily {
        match self {
            MovieCategory::PopularStreaming
            | MovieCategory::PopularOnTv
            | MovieCategory::PopularForRent
            | MovieCategory::PopularInTheatres => MovieCategoryFamily::Popular,
            MovieCategory::NowPlayingMovies | MovieCategory::NowPlayingTv => {
                MovieCategoryFamily::NowPlaying
            }
            MovieCategory::UpcomingToday | MovieCategory::UpcomingThisWeek => {
                MovieCategoryFamily::Upcoming
            }
        }
    }

    /// Label text shown on the category tab.
    pub fn label(self) -> &'static str {
        match self {
            MovieCategory::PopularStreaming => "Streaming",
            MovieCategory::PopularOnTv => "On TV",
            MovieCategory::PopularForRent => "For Rent",
            MovieCategory::PopularInTheatres => "In Theatres",
            MovieCategory::NowPlayingMovies => "Movies",
            MovieCategory::NowPlayingTv => "TV",
            MovieCategory::UpcomingToday => "Today",
            MovieCategory::UpcomingThisWeek => "This week",
        }
    }
}

/// Group of mutually exclusive categories sharing one selected slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieCategoryFamily {
    Popular,
    NowPlaying,
    Upcoming,
}

impl MovieCategoryFamily {
    pub const ALL: [MovieCategoryFamily; 3] = [
        MovieCategoryFamily::Popular,
        MovieCategoryFamily::NowPlaying,
        MovieCategoryFamily::Upcoming,
    ];

    /// Categories of this family in display order.
    pub fn categories(self) -> &'static [MovieCategory] {
        match self {
            MovieCategoryFamily::Popular => &[
                MovieCategory::PopularStreaming,
                MovieCategory::PopularOnTv,
                MovieCategory::PopularForRent,
                MovieCategory::PopularInTheatres,
            ],
            MovieCategoryFamily::NowPlaying => {
                &[MovieCategory::NowPlayingMovies, MovieCategory::NowPlayingTv]
            }
            MovieCategoryFamily::Upcoming => {
                &[MovieCategory::UpcomingToday, MovieCategory::UpcomingThisWeek]
            }
        }
    }

    /// The category selected before the user picks one.
    pub fn default_category(self) -> MovieCategory {
        self.categories()[0]
    }

    pub fn contains(self, category: MovieCategory) -> bool {
        category.family() == self
    }
}
