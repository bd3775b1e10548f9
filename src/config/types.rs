//! Seed record types matching the JSON bodies the API exchanges.
//! Every field except `id` is optional and may hold any JSON value, as the
//! API stores whatever it is sent; unknown fields are kept in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<Value>,
    /// Stored and returned in plaintext.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senha: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perfil: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Shape shared by clients and suppliers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Contato {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type Cliente = Contato;
pub type Fornecedor = Contato;

/// Initial contents of the three collections.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub usuarios: Vec<Usuario>,
    #[serde(default)]
    pub clientes: Vec<Cliente>,
    #[serde(default)]
    pub fornecedores: Vec<Fornecedor>,
}

impl Usuario {
    fn seed(id: i64, nome: &str, email: &str, login: &str, perfil: &str) -> Self {
        Usuario {
            id,
            nome: Some(nome.into()),
            email: Some(email.into()),
            login: Some(login.into()),
            senha: Some("123".into()),
            perfil: Some(perfil.into()),
            extra: Map::new(),
        }
    }
}

impl Contato {
    fn seed(id: i64, nome: &str, email: &str, telefone: &str) -> Self {
        Contato {
            id,
            nome: Some(nome.into()),
            email: Some(email.into()),
            telefone: Some(telefone.into()),
            extra: Map::new(),
        }
    }
}

impl Default for SeedData {
    fn default() -> Self {
        SeedData {
            usuarios: vec![
                Usuario::seed(1, "João Silva", "joao@example.com", "joao", "Administrador"),
                Usuario::seed(2, "Maria Oliveira", "maria@example.com", "maria", "Usuário"),
            ],
            clientes: vec![
                Contato::seed(1, "Cliente A", "clientea@example.com", "1234567890"),
                Contato::seed(2, "Cliente B", "clienteb@example.com", "0987654321"),
            ],
            fornecedores: vec![
                Contato::seed(1, "Fornecedor X", "fornecedor@example.com", "1111111111"),
                Contato::seed(2, "Fornecedor Y", "fornecedor2@example.com", "2222222222"),
            ],
        }
    }
}
