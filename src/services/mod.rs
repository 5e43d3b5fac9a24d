pub mod corpus;
pub mod mood_profiles;
pub mod normalizer;
pub mod providers;
pub mod ranker;
pub mod recommendations;
