// src/models/frontend.rs
//
// Visões pré-juntadas retornadas pelos endpoints "frontend" da API
// (minha-imobiliaria, meus-imoveis, minhas-propostas, meus-contratos).
// São read-models: cópias efêmeras, nunca fonte de verdade.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::Role;
use super::contrato::ContratoStatus;
use super::imovel::ImovelStatus;
use super::proposta::PropostaStatus;

// --- Resumos aninhados ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioResumo {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub role: Role,
    pub telefone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PessoaResumo {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImovelResumo {
    pub id: Uuid,
    pub titulo: String,
    pub endereco: String,
    pub cidade: Option<String>,
    pub preco: Decimal,
    pub imagens: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropostaResumo {
    pub id: Uuid,
    pub valor: Decimal,
    pub status: PropostaStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorretorResumo {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub creci: Option<String>,
    pub usuario: Option<UsuarioResumo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImobiliariaResumo {
    pub id: Uuid,
    pub razao_social: String,
    pub nome_fantasia: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProprietarioVinculo {
    pub id: Uuid,
    pub pessoa: PessoaResumo,
    pub percentual_propriedade: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstatisticasImobiliaria {
    pub total_imoveis: i64,
    pub total_propostas: i64,
    pub total_contratos: i64,
}

// --- Visões completas ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImobiliariaCompleta {
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
    pub usuario: UsuarioResumo,
    pub corretores: Option<Vec<CorretorResumo>>,
    pub estatisticas: Option<EstatisticasImobiliaria>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImovelCompleto {
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
    pub matricula_numero: Option<String>,
    pub status: ImovelStatus,
    pub imagens: Option<Vec<String>>,
    pub caracteristicas: Option<Vec<String>>,
    pub imobiliaria: Option<ImobiliariaResumo>,
    pub proprietarios: Option<Vec<ProprietarioVinculo>>,
    pub total_propostas: i64,
    pub propostas_ativas: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropostaCompleta {
    pub id: Uuid,
    pub imovel_id: Uuid,
    pub comprador_id: Uuid,
    pub vendedor_id: Uuid,
    pub corretor_id: Option<Uuid>,
    pub imobiliaria_id: Option<Uuid>,
    pub valor: Decimal,
    pub forma_pagamento: Option<String>,
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
    pub imovel: ImovelResumo,
    pub comprador: PessoaResumo,
    pub vendedor: PessoaResumo,
    // A proposta só oferece "gerar contrato" quando ainda não existe um.
    pub tem_contrato: bool,
    pub contrato_id: Option<Uuid>,
    pub contrato_status: Option<ContratoStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContratoCompleto {
    pub id: Uuid,
    pub proposta_id: Uuid,
    pub imovel_id: Uuid,
    pub conteudo: String,
    pub status: ContratoStatus,
    pub gerado_por_ia: bool,
    pub modelo_imobiliaria_id: Option<Uuid>,
    pub aprovado_comprador: bool,
    pub aprovado_vendedor: bool,
    pub aprovado_imobiliaria: bool,
    pub data_aprovacao_comprador: Option<DateTime<Utc>>,
    pub data_aprovacao_vendedor: Option<DateTime<Utc>>,
    pub data_aprovacao_imobiliaria: Option<DateTime<Utc>>,
    pub assinado_comprador: bool,
    pub assinado_vendedor: bool,
    pub data_assinatura_comprador: Option<DateTime<Utc>>,
    pub data_assinatura_vendedor: Option<DateTime<Utc>>,
    pub arquivo_assinado_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub proposta: PropostaResumo,
    pub imovel: ImovelResumo,
    pub comprador: PessoaResumo,
    pub vendedor: PessoaResumo,
    pub total_mensagens: i64,
}

// --- Filtros (valem tanto para as listas gerais quanto para as "minhas") ---

#[derive(Debug, Clone, Default, Serialize)]
pub struct FiltroImoveis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ImovelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imobiliaria_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FiltroPropostas {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropostaStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imovel_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imobiliaria_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FiltroContratos {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContratoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposta_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imovel_id: Option<Uuid>,
}
