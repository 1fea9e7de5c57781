// src/models/mensagem.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::auth::Usuario;

// Quem escreveu a mensagem. Campo explícito definido pelo servidor;
// servidores antigos que ainda não o enviam caem em `humano`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutorTipo {
    #[default]
    Humano,
    Assistente,
}

// Mensagem do chat de um contrato. Apêndice puro do ponto de vista do
// cliente: a lista só muda após o round trip e a invalidação do cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mensagem {
    pub id: Uuid,
    pub contrato_id: Uuid,
    pub usuario_id: Uuid,
    pub texto: String,
    pub anexos: Option<Vec<String>>,
    #[serde(default)]
    pub autor_tipo: AutorTipo,
    pub criado_em: DateTime<Utc>,
    // Autor expandido, quando o servidor faz o join.
    pub usuario: Option<Usuario>,
}

impl Mensagem {
    pub fn do_assistente(&self) -> bool {
        self.autor_tipo == AutorTipo::Assistente
    }
}

// --- Payloads ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NovaMensagem {
    pub contrato_id: Uuid,
    #[validate(length(min = 1, message = "A mensagem não pode ser vazia."))]
    pub texto: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anexos: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtualizarMensagem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anexos: Option<Vec<String>>,
}
