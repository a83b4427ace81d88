use serde::{Deserialize, Serialize};

// ----------------- Article Request -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateVotesRequest {
    pub inc_votes: i64,
}

// ----------------- Comment Request -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct CommentRequest {
    pub body: String,
    pub username: String,
}
