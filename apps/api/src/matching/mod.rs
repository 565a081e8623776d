// Fit-scoring pipeline: fuzzy matching, requirement classification, and the
// reject/proceed decision. Everything in here is pure and synchronous —
// external collaborators (search, extraction, generation) live elsewhere
// behind ports.

pub mod fit;
pub mod fuzzy;
pub mod skills;
