// src/models/proposta.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Enums ---

// Progressão legal da proposta. O status é sempre o último estado conhecido
// do servidor: transições conjuntas (ambas as aprovações -> aprovada) são
// decididas lá, nunca calculadas aqui.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropostaStatus {
    Rascunho,
    Enviada,
    Aprovada,
    Rejeitada,
    Cancelada,
}

// Parte envolvida em aprovações e assinaturas. A imobiliária só aparece
// como terceira aprovação opcional em contratos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parte {
    Comprador,
    Vendedor,
    Imobiliaria,
}

impl Parte {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parte::Comprador => "comprador",
            Parte::Vendedor => "vendedor",
            Parte::Imobiliaria => "imobiliaria",
        }
    }
}

// --- Entidade ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposta {
    pub id: Uuid,
    pub imovel_id: Uuid,
    pub comprador_id: Uuid,
    pub vendedor_id: Uuid,
    pub corretor_id: Option<Uuid>,
    pub imobiliaria_id: Uuid,
    pub valor: Decimal,
    pub forma_pagamento: String,
    pub relato_negociacao: Option<String>,
    pub bens_que_ficam: Option<String>,
    pub data_posse: Option<NaiveDate>,
    pub status: PropostaStatus,
    pub aprovado_comprador: bool,
    pub aprovado_vendedor: bool,
    pub data_aprovacao_comprador: Option<DateTime<Utc>>,
    pub data_aprovacao_vendedor: Option<DateTime<Utc>>,
    pub observacoes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Proposta {
    /// Enviar só é possível enquanto a proposta é um rascunho.
    pub fn pode_enviar(&self) -> bool {
        self.status == PropostaStatus::Rascunho
    }

    pub fn aprovacao_de(&self, parte: Parte) -> bool {
        match parte {
            Parte::Comprador => self.aprovado_comprador,
            Parte::Vendedor => self.aprovado_vendedor,
            // Imobiliária não aprova propostas.
            Parte::Imobiliaria => false,
        }
    }

    /// Cada parte aprova uma única vez, e somente depois do envio.
    /// A transição conjunta para `aprovada` é decisão do servidor.
    pub fn pode_aprovar(&self, parte: Parte) -> bool {
        if parte == Parte::Imobiliaria {
            return false;
        }
        self.status == PropostaStatus::Enviada && !self.aprovacao_de(parte)
    }

    /// Gerar contrato exige proposta aprovada e nenhum contrato existente.
    pub fn pode_gerar_contrato(&self, ja_tem_contrato: bool) -> bool {
        self.status == PropostaStatus::Aprovada && !ja_tem_contrato
    }

    /// Proposta ainda em negociação (contador "em andamento" do painel).
    pub fn em_andamento(&self) -> bool {
        match self.status {
            PropostaStatus::Rascunho | PropostaStatus::Enviada => true,
            PropostaStatus::Aprovada => !self.aprovado_comprador && !self.aprovado_vendedor,
            _ => false,
        }
    }
}

// --- Payloads ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NovaProposta {
    pub imovel_id: Uuid,
    pub comprador_id: Uuid,
    pub vendedor_id: Uuid,
    pub corretor_id: Option<Uuid>,
    pub imobiliaria_id: Uuid,
    pub valor: Decimal,
    #[validate(length(min = 1, message = "A forma de pagamento é obrigatória."))]
    pub forma_pagamento: String,
    pub relato_negociacao: Option<String>,
    pub bens_que_ficam: Option<String>,
    pub data_posse: Option<NaiveDate>,
    pub observacoes: Option<String>,
}

// Atualização parcial: só os campos presentes vão no corpo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtualizarProposta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forma_pagamento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relato_negociacao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bens_que_ficam: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_posse: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}
