// src/models/template.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Modelo de contrato mantido pela imobiliária; o servidor usa o template
// ativo como base quando não gera o texto via IA.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContratoTemplate {
    pub id: Uuid,
    pub imobiliaria_id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub conteudo_template: String,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NovoTemplate {
    pub imobiliaria_id: Uuid,
    #[validate(length(min = 1, message = "O nome do template é obrigatório."))]
    pub nome: String,
    pub descricao: Option<String>,
    #[validate(length(min = 1, message = "O conteúdo do template é obrigatório."))]
    pub conteudo_template: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtualizarTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conteudo_template: Option<String>,
}
