use crate::game::GameSession;

pub struct State {
    pub columns: u16,
    pub rows: u16,
    pub screen: Screen,
    pub session: Option<GameSession>,
    pub final_score: i32,
    pub seed: Option<u64>,
    pub err: Option<anyhow::Error>,
}

#[derive(Eq, PartialEq)]
pub enum Screen {
    Main,
    Game,
    Score,
}
