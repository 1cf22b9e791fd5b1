use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::error::DexError;
use super::model::{Move, Pokemon};

/// On-disk shape of the dataset document.
#[derive(Deserialize)]
struct Document {
    generation: u32,
    pokemon_count: usize,
    move_count: usize,
    pokemons: Vec<Pokemon>,
    moves: Vec<Move>,
}

/// The static Pokédex/Movedex: loaded once at startup, read-only after.
///
/// Records are addressed by 1-based position, which the document also
/// declares as each record's id. A loading failure means the process cannot
/// start correctly: callers are expected to treat the error as fatal rather
/// than run without a dataset; the loader itself just returns it.
#[derive(Debug)]
pub struct Dex {
    generation: u32,
    pokedex: Vec<Pokemon>,
    movedex: Vec<Move>,
}

impl Dex {
    /// Read and parse a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DexError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a dataset document from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, DexError> {
        let document: Document = serde_json::from_str(raw)?;

        if document.pokemons.len() != document.pokemon_count {
            return Err(DexError::Malformed(format!(
                "pokemon_count is {} but {} pokèmons are listed",
                document.pokemon_count,
                document.pokemons.len()
            )));
        }
        if document.moves.len() != document.move_count {
            return Err(DexError::Malformed(format!(
                "move_count is {} but {} moves are listed",
                document.move_count,
                document.moves.len()
            )));
        }
        for (position, pokemon) in document.pokemons.iter().enumerate() {
            if pokemon.id as usize != position + 1 {
                return Err(DexError::Malformed(format!(
                    "pokèmon {:?} declares id {} at position {}",
                    pokemon.name,
                    pokemon.id,
                    position + 1
                )));
            }
        }
        for (position, record) in document.moves.iter().enumerate() {
            if record.id as usize != position + 1 {
                return Err(DexError::Malformed(format!(
                    "move {:?} declares id {} at position {}",
                    record.name,
                    record.id,
                    position + 1
                )));
            }
        }

        debug!(
            "dex loaded: generation {}, {} pokèmons, {} moves",
            document.generation, document.pokemon_count, document.move_count
        );

        Ok(Dex {
            generation: document.generation,
            pokedex: document.pokemons,
            movedex: document.moves,
        })
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn pokemons(&self) -> &[Pokemon] {
        &self.pokedex
    }

    pub fn moves(&self) -> &[Move] {
        &self.movedex
    }

    /// 1-based lookup; 0 and anything past the end are absent.
    pub fn pokemon_by_id(&self, id: usize) -> Result<&Pokemon, DexError> {
        if id == 0 || id > self.pokedex.len() {
            Err(DexError::PokemonNotFound)
        } else {
            Ok(&self.pokedex[id - 1])
        }
    }

    /// 1-based lookup; 0 and anything past the end are absent.
    pub fn move_by_id(&self, id: usize) -> Result<&Move, DexError> {
        if id == 0 || id > self.movedex.len() {
            Err(DexError::MoveNotFound)
        } else {
            Ok(&self.movedex[id - 1])
        }
    }
}
