use shared_resources::config::ElevatorConfig;
use shared_resources::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Hallway(u8, Direction),
    Cabin(u8),
    ToggleOverweight,
    Status,
    Quit,
}

/// Parses one line of console input. Anything malformed or outside the
/// building comes back as None and must be ignored by the caller; the
/// dispatcher never sees an invalid request.
pub fn parse_token(input: &str, settings: &ElevatorConfig) -> Option<Token> {
    let token = input.trim().to_uppercase();
    match token.as_str() {
        "Q" => return Some(Token::Quit),
        "O" => return Some(Token::ToggleOverweight),
        "S" => return Some(Token::Status),
        _ => (),
    }

    let (floor, direction) = match token.strip_suffix('U') {
        Some(rest) => (rest.parse::<u8>().ok()?, Some(Direction::Up)),
        None => match token.strip_suffix('D') {
            Some(rest) => (rest.parse::<u8>().ok()?, Some(Direction::Down)),
            None => (token.parse::<u8>().ok()?, None),
        },
    };
    if floor < settings.ground_floor || floor > settings.num_floors {
        return None
    }
    match direction {
        Some(direction) => Some(Token::Hallway(floor, direction)),
        None => Some(Token::Cabin(floor)),
    }
}
