// src/models/documento.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntidadeTipo {
    Imovel,
    Proprietario,
    Comprador,
    Corretor,
    Imobiliaria,
}

impl EntidadeTipo {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntidadeTipo::Imovel => "imovel",
            EntidadeTipo::Proprietario => "proprietario",
            EntidadeTipo::Comprador => "comprador",
            EntidadeTipo::Corretor => "corretor",
            EntidadeTipo::Imobiliaria => "imobiliaria",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentoStatus {
    Pendente,
    Enviado,
    Verificado,
    Aprovado,
    Rejeitado,
}

// --- Entidade ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Documento {
    pub id: Uuid,
    pub entidade_tipo: EntidadeTipo,
    pub entidade_id: Uuid,
    pub tipo_documento: String,
    pub nome: String,
    pub descricao: Option<String>,
    pub url: String,
    pub nome_arquivo: Option<String>,
    pub tamanho_arquivo: Option<i64>,
    pub mime_type: Option<String>,
    pub data_emissao: Option<NaiveDate>,
    pub data_validade: Option<NaiveDate>,
    pub status: DocumentoStatus,
    pub enviado_por: Option<Uuid>,
    pub verificado_por: Option<Uuid>,
    pub data_verificacao: Option<DateTime<Utc>>,
    pub observacoes: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Documento {
    /// Conta como pendência de documentação no painel.
    pub fn pendente_de_verificacao(&self) -> bool {
        matches!(
            self.status,
            DocumentoStatus::Pendente | DocumentoStatus::Enviado
        )
    }
}

// --- Payloads ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NovoDocumento {
    pub entidade_tipo: EntidadeTipo,
    pub entidade_id: Uuid,
    #[validate(length(min = 1, message = "O tipo de documento é obrigatório."))]
    pub tipo_documento: String,
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,
    pub descricao: Option<String>,
    #[validate(length(min = 1, message = "A URL do arquivo é obrigatória."))]
    pub url: String,
    pub nome_arquivo: Option<String>,
    pub mime_type: Option<String>,
    pub data_emissao: Option<NaiveDate>,
    pub data_validade: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificarDocumento {
    pub status: DocumentoStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}
