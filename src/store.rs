//! In-memory collection store and the current-user session slot.
//! Collections live for the process lifetime; a restart resets them to the seed.

use crate::config::SeedData;
use crate::error::AppError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A stored record: a JSON object holding whatever fields were sent.
pub type Record = Map<String, Value>;

/// Static description of one collection: where it is mounted and how it answers.
#[derive(Debug, PartialEq, Eq)]
pub struct EntityKind {
    /// Path segment under `/api`, e.g. `clientes`.
    pub path_segment: &'static str,
    pub id_field: &'static str,
    /// Key wrapping a single record in success bodies, e.g. `cliente`.
    pub response_key: &'static str,
    pub not_found: &'static str,
}

pub const USUARIOS: EntityKind = EntityKind {
    path_segment: "usuarios",
    id_field: "id",
    response_key: "usuario",
    not_found: "Usuário não encontrado",
};

pub const CLIENTES: EntityKind = EntityKind {
    path_segment: "clientes",
    id_field: "id",
    response_key: "cliente",
    not_found: "Cliente não encontrado",
};

pub const FORNECEDORES: EntityKind = EntityKind {
    path_segment: "fornecedores",
    id_field: "id",
    response_key: "fornecedor",
    not_found: "Fornecedor não encontrado",
};

/// Ordered records of one entity kind, guarded by a single lock so that
/// id generation and append happen atomically.
#[derive(Debug)]
pub struct Collection {
    kind: &'static EntityKind,
    records: RwLock<Vec<Record>>,
}

impl Collection {
    pub fn new(kind: &'static EntityKind, records: Vec<Record>) -> Self {
        Collection {
            kind,
            records: RwLock::new(records),
        }
    }

    pub fn kind(&self) -> &'static EntityKind {
        self.kind
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Record> {
        self.read().clone()
    }

    pub fn find(&self, id: i64) -> Option<Record> {
        self.read().iter().find(|r| self.id_of(r) == Some(id)).cloned()
    }

    /// Append a record with id `max(existing ids, 0) + 1`. Input fields are
    /// stored verbatim; an `id` in the input is ignored.
    pub fn create(&self, fields: Record) -> Record {
        let mut records = self.write();
        let id = records
            .iter()
            .filter_map(|r| self.id_of(r))
            .fold(0, i64::max)
            .saturating_add(1);

        let mut record = Record::with_capacity(fields.len() + 1);
        record.insert(self.kind.id_field.to_string(), Value::from(id));
        for (k, v) in fields {
            if k != self.kind.id_field {
                record.insert(k, v);
            }
        }
        records.push(record.clone());
        tracing::info!(collection = self.kind.path_segment, id, "record created");
        record
    }

    /// Shallow-merge `patch` onto the record with `id`. Patched fields are
    /// added or overwritten, never removed; the id itself is not patchable.
    pub fn update(&self, id: i64, patch: Record) -> Result<Record, AppError> {
        let mut records = self.write();
        let record = records
            .iter_mut()
            .find(|r| self.id_of(r) == Some(id))
            .ok_or(AppError::NotFound(self.kind.not_found))?;
        for (k, v) in patch {
            if k != self.kind.id_field {
                record.insert(k, v);
            }
        }
        tracing::info!(collection = self.kind.path_segment, id, "record updated");
        Ok(record.clone())
    }

    /// Remove the record with `id`; the others keep their relative order.
    pub fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut records = self.write();
        let index = records
            .iter()
            .position(|r| self.id_of(r) == Some(id))
            .ok_or(AppError::NotFound(self.kind.not_found))?;
        records.remove(index);
        tracing::info!(collection = self.kind.path_segment, id, "record deleted");
        Ok(())
    }

    fn id_of(&self, record: &Record) -> Option<i64> {
        record.get(self.kind.id_field).and_then(Value::as_i64)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Record>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Record>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Process-wide "current user" slot. Set by login, cleared by logout; no
/// other operation reads it, so it grants nothing.
#[derive(Debug, Default)]
pub struct Session {
    current: RwLock<Option<Record>>,
}

impl Session {
    pub fn set(&self, user: Record) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn current(&self) -> Option<Record> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Owns every collection plus the session; handlers reach it through `AppState`.
#[derive(Debug)]
pub struct Store {
    usuarios: Collection,
    clientes: Collection,
    fornecedores: Collection,
    session: Session,
}

impl Store {
    pub fn new(seed: SeedData) -> Self {
        Store {
            usuarios: Collection::new(&USUARIOS, to_records(seed.usuarios)),
            clientes: Collection::new(&CLIENTES, to_records(seed.clientes)),
            fornecedores: Collection::new(&FORNECEDORES, to_records(seed.fornecedores)),
            session: Session::default(),
        }
    }

    pub fn usuarios(&self) -> &Collection {
        &self.usuarios
    }

    pub fn clientes(&self) -> &Collection {
        &self.clientes
    }

    pub fn fornecedores(&self) -> &Collection {
        &self.fornecedores
    }

    pub fn collection_by_path(&self, path_segment: &str) -> Option<&Collection> {
        [&self.usuarios, &self.clientes, &self.fornecedores]
            .into_iter()
            .find(|c| c.kind().path_segment == path_segment)
    }

    /// Plaintext, case-sensitive match on `email` and `senha`. An absent
    /// credential only matches a user that lacks the same field.
    /// The matched user is returned as stored, password included.
    pub fn login(&self, email: Option<&Value>, senha: Option<&Value>) -> Result<Record, AppError> {
        let user = self
            .usuarios
            .read()
            .iter()
            .find(|u| u.get("email") == email && u.get("senha") == senha)
            .cloned()
            .ok_or(AppError::InvalidCredentials)?;
        self.session.set(user.clone());
        tracing::info!(id = ?user.get("id"), "login");
        Ok(user)
    }

    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("logout");
    }

    pub fn current_user(&self) -> Option<Record> {
        self.session.current()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(SeedData::default())
    }
}

fn to_records<T: Serialize>(items: Vec<T>) -> Vec<Record> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::to_value(item) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        })
        .collect()
}
