//! Seed validation: ids must be unique within each collection.

use crate::config::SeedData;
use crate::error::ConfigError;
use std::collections::HashSet;

pub fn validate_seed(seed: &SeedData) -> Result<(), ConfigError> {
    unique_ids("usuarios", seed.usuarios.iter().map(|u| u.id))?;
    unique_ids("clientes", seed.clientes.iter().map(|c| c.id))?;
    unique_ids("fornecedores", seed.fornecedores.iter().map(|f| f.id))?;
    Ok(())
}

fn unique_ids(collection: &'static str, ids: impl Iterator<Item = i64>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateId { collection, id });
        }
    }
    Ok(())
}
