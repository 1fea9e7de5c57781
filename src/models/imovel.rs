// src/models/imovel.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImovelStatus {
    Disponivel,
    Reservado,
    Vendido,
    Retirado,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Imovel {
    pub id: Uuid,
    pub imobiliaria_id: Uuid,
    pub titulo: String,
    pub descricao: Option<String>,
    pub endereco: String,
    pub cidade: String,
    pub estado: String,
    pub cep: Option<String>,
    pub preco: Decimal,
    pub area_total: Option<Decimal>,
    pub area_construida: Option<Decimal>,
    pub quartos: Option<i32>,
    pub banheiros: Option<i32>,
    pub vagas_garagem: Option<i32>,
    // Dados de registro em cartório
    pub matricula_numero: Option<String>,
    pub cartorio: Option<String>,
    pub comarca: Option<String>,
    pub status: ImovelStatus,
    pub imagens: Option<Vec<String>>,
    pub caracteristicas: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Imovel {
    pub fn vendido(&self) -> bool {
        self.status == ImovelStatus::Vendido
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Imobiliaria {
    pub id: Uuid,
    pub usuario_id: Uuid,
    pub razao_social: String,
    pub nome_fantasia: Option<String>,
    pub cnpj: String,
    pub creci: Option<String>,
    pub logo_url: Option<String>,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Payloads ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NovoImovel {
    pub imobiliaria_id: Uuid,
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub titulo: String,
    pub descricao: Option<String>,
    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    pub endereco: String,
    #[validate(length(min = 1, message = "A cidade é obrigatória."))]
    pub cidade: String,
    #[validate(length(min = 2, max = 2, message = "Use a sigla do estado (UF)."))]
    pub estado: String,
    pub cep: Option<String>,
    pub preco: Decimal,
    pub area_total: Option<Decimal>,
    pub area_construida: Option<Decimal>,
    pub quartos: Option<i32>,
    pub banheiros: Option<i32>,
    pub vagas_garagem: Option<i32>,
    pub matricula_numero: Option<String>,
    pub cartorio: Option<String>,
    pub comarca: Option<String>,
    pub imagens: Option<Vec<String>>,
    pub caracteristicas: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtualizarImovel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preco: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ImovelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caracteristicas: Option<Vec<String>>,
}
