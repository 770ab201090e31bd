pub mod render;
pub mod tournament;

pub use tournament::TournamentService;
