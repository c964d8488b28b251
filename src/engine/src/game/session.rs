use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{GameError, Result};
use crate::game::board::{Board, PlacedTile, Position};
use crate::game::conversion::SerializableBoard;
use crate::game::tile_bag::TileBag;
use crate::game::validation::ValidationResult;
use crate::game::{GameEngine, Tile};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub score: u32,
    pub rack: Vec<Tile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SavedGame {
    board: SerializableBoard,
    players: Vec<Player>,
    current_player: usize,
    bag: TileBag,
    pending: Vec<PlacedTile>,
    game_over: bool,
}

/// Turn and rack bookkeeping around the engine. The committed board only
/// changes when a move passes validation; tiles put down this turn live in
/// `pending` until then.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: GameEngine,
    board: Board,
    players: Vec<Player>,
    current_player: usize,
    bag: TileBag,
    pending: Vec<PlacedTile>,
    game_over: bool,
}

impl GameSession {
    /// Deals a full rack to each player in turn order.
    pub fn start<S: AsRef<str>>(names: &[S], mut bag: TileBag, engine: GameEngine) -> Result<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::PlayerCount(names.len()));
        }

        let mut players = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(GameError::EmptyPlayerName);
            }
            players.push(Player {
                id: format!("player{}", i + 1),
                name: name.to_string(),
                score: 0,
                rack: bag.draw(engine.rack_size()),
            });
        }

        info!(
            "Starting game for {} players, {} tiles left in the bag",
            players.len(),
            bag.len()
        );

        Ok(Self {
            engine,
            board: Board::new(),
            players,
            current_player: 0,
            bag,
            pending: Vec::new(),
            game_over: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    pub fn pending(&self) -> &[PlacedTile] {
        &self.pending
    }

    pub fn tiles_in_bag(&self) -> usize {
        self.bag.len()
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The board before this turn's tiles.
    pub fn original_board(&self) -> &Board {
        &self.board
    }

    /// The board as the player sees it, pending tiles included.
    pub fn board_with_pending(&self) -> Board {
        self.board.with_tiles(&self.pending)
    }

    pub fn place_tile(&mut self, tile_id: &str, position: Position) -> Result<()> {
        self.ensure_active()?;
        self.ensure_free(position)?;

        let rack = &mut self.players[self.current_player].rack;
        let index = rack
            .iter()
            .position(|t| t.id == tile_id)
            .ok_or_else(|| GameError::TileNotInRack(tile_id.to_string()))?;
        let tile = rack.remove(index);
        self.pending.push(PlacedTile::new(tile, position));
        Ok(())
    }

    /// Takes back a tile placed this turn. Committed tiles stay put.
    pub fn return_tile(&mut self, position: Position) -> Result<()> {
        self.ensure_active()?;
        let index = self.pending_index(position)?;
        let placed = self.pending.remove(index);
        self.players[self.current_player].rack.push(placed.tile);
        Ok(())
    }

    pub fn move_tile(&mut self, from: Position, to: Position) -> Result<()> {
        self.ensure_active()?;
        let index = self.pending_index(from)?;
        if from == to {
            return Ok(());
        }
        self.ensure_free(to)?;
        self.pending[index].position = to;
        Ok(())
    }

    pub fn recall_all(&mut self) {
        let rack = &mut self.players[self.current_player].rack;
        rack.extend(self.pending.drain(..).map(|p| p.tile));
    }

    /// Live feedback on the tiles placed so far this turn.
    pub fn preview(&self) -> Option<ValidationResult> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.validate_pending())
    }

    /// Validates the pending move and, if it is legal, commits it, scores it,
    /// refills the rack and passes the turn. A rejected move changes nothing.
    pub fn submit(&mut self) -> Result<ValidationResult> {
        self.ensure_active()?;

        let result = self.validate_pending();
        if !result.is_valid {
            warn!(
                player = %self.current_player().name,
                "Rejected move: {}",
                result.error_message()
            );
            return Ok(result);
        }

        let played = self.pending.len();
        for placed in self.pending.drain(..) {
            self.board.set_tile(placed.position, placed.tile);
        }

        let drawn = self.bag.draw(played);
        let player = &mut self.players[self.current_player];
        player.score = player.score.saturating_add(result.total_score);
        player.rack.extend(drawn);

        info!(
            player = %player.name,
            score = player.score,
            "Played {} for {} points",
            result.word_list(),
            result.total_score
        );

        if self.bag.is_empty() && player.rack.is_empty() {
            self.game_over = true;
            info!(player = %player.name, "Game over: bag and rack are empty");
        } else {
            self.advance_turn();
        }

        Ok(result)
    }

    pub fn pass_turn(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.recall_all();
        self.advance_turn();
        Ok(())
    }

    pub fn shuffle_rack<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.ensure_active()?;
        self.players[self.current_player].rack.shuffle(rng);
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        let saved = SavedGame {
            board: SerializableBoard::from(&self.board),
            players: self.players.clone(),
            current_player: self.current_player,
            bag: self.bag.clone(),
            pending: self.pending.clone(),
            game_over: self.game_over,
        };
        Ok(serde_json::to_string(&saved)?)
    }

    pub fn from_json(json: &str, engine: GameEngine) -> Result<Self> {
        let saved: SavedGame = serde_json::from_str(json)?;
        let count = saved.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::PlayerCount(count));
        }

        if saved.current_player >= count {
            return Err(GameError::CurrentPlayer(saved.current_player));
        }

        let board: Board = saved.board.into();
        let mut taken = HashSet::new();
        for placed in &saved.pending {
            let position = placed.position;
            let key = position.key().ok_or(GameError::OutOfBounds(position))?;
            if board.is_occupied(position) || !taken.insert(key) {
                return Err(GameError::SquareOccupied(position));
            }
        }

        Ok(Self {
            engine,
            board,
            players: saved.players,
            current_player: saved.current_player,
            bag: saved.bag,
            pending: saved.pending,
            game_over: saved.game_over,
        })
    }

    fn validate_pending(&self) -> ValidationResult {
        self.engine
            .validate_move(&self.board_with_pending(), &self.pending, Some(&self.board))
    }

    fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
    }

    fn ensure_active(&self) -> Result<()> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn ensure_free(&self, position: Position) -> Result<()> {
        if !position.in_bounds() {
            return Err(GameError::OutOfBounds(position));
        }
        if self.board.is_occupied(position) || self.pending.iter().any(|p| p.position == position) {
            return Err(GameError::SquareOccupied(position));
        }
        Ok(())
    }

    fn pending_index(&self, position: Position) -> Result<usize> {
        self.pending
            .iter()
            .position(|p| p.position == position)
            .ok_or(GameError::NotPending(position))
    }
}
