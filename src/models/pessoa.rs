// src/models/pessoa.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PessoaTipo {
    Proprietario,
    Comprador,
    Ambos,
}

// Parte física de uma negociação (proprietário e/ou comprador).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pessoa {
    pub id: Uuid,
    pub usuario_id: Option<Uuid>,
    pub nome: String,
    pub cpf: String,
    pub rg: Option<String>,
    pub data_nascimento: Option<chrono::NaiveDate>,
    pub estado_civil: Option<String>,
    pub nome_conjuge: Option<String>,
    pub cpf_conjuge: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub tipo: PessoaTipo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
