// src/models/contrato.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::proposta::Parte;

// --- Enums ---

// `pendente`/`em_analise`/`em_revisao` funcionam como um pool de espera
// antes das aprovações; `assinado` e `concluido` são alcançados apenas por
// lógica do servidor quando ambas as assinaturas existem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContratoStatus {
    Pendente,
    EmAnalise,
    EmRevisao,
    Aprovado,
    Assinado,
    Concluido,
}

// --- Entidade ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contrato {
    pub id: Uuid,
    pub proposta_id: Uuid,
    pub imovel_id: Uuid,
    // Texto integral gerado (via IA ou template) no servidor.
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
}

impl Contrato {
    pub fn aprovacao_de(&self, parte: Parte) -> bool {
        match parte {
            Parte::Comprador => self.aprovado_comprador,
            Parte::Vendedor => self.aprovado_vendedor,
            Parte::Imobiliaria => self.aprovado_imobiliaria,
        }
    }

    pub fn assinatura_de(&self, parte: Parte) -> bool {
        match parte {
            Parte::Comprador => self.assinado_comprador,
            Parte::Vendedor => self.assinado_vendedor,
            // Imobiliária não assina.
            Parte::Imobiliaria => false,
        }
    }

    /// Aprovações das duas partes obrigatórias (a da imobiliária é opcional).
    pub fn totalmente_aprovado(&self) -> bool {
        self.aprovado_comprador && self.aprovado_vendedor
    }

    pub fn totalmente_assinado(&self) -> bool {
        self.assinado_comprador && self.assinado_vendedor
    }

    /// Aprovar é permitido enquanto o contrato ainda não foi plenamente
    /// aprovado: qualquer um dos estados de espera, uma vez por parte.
    /// O servidor revalida; aqui só se decide a visibilidade da ação.
    pub fn pode_aprovar(&self, parte: Parte) -> bool {
        matches!(
            self.status,
            ContratoStatus::Pendente | ContratoStatus::EmAnalise | ContratoStatus::EmRevisao
        ) && !self.aprovacao_de(parte)
    }

    /// Assinar exige contrato aprovado, aprovação prévia da própria parte e
    /// assinatura ainda pendente. Imobiliária nunca assina.
    pub fn pode_assinar(&self, parte: Parte) -> bool {
        if parte == Parte::Imobiliaria {
            return false;
        }
        self.status == ContratoStatus::Aprovado
            && self.aprovacao_de(parte)
            && !self.assinatura_de(parte)
    }

    /// Contrato em tramitação (contador "ativos" do painel).
    pub fn ativo(&self) -> bool {
        matches!(
            self.status,
            ContratoStatus::Pendente
                | ContratoStatus::EmAnalise
                | ContratoStatus::EmRevisao
                | ContratoStatus::Aprovado
        )
    }

    /// Aprovado mas com pelo menos uma assinatura faltando.
    pub fn aguardando_assinatura(&self) -> bool {
        self.status == ContratoStatus::Aprovado
            && (!self.assinado_comprador || !self.assinado_vendedor)
    }

    pub fn concluido(&self) -> bool {
        self.status == ContratoStatus::Concluido
    }

    /// O download do documento final só existe depois que o servidor anexa
    /// o arquivo assinado.
    pub fn arquivo_disponivel(&self) -> bool {
        self.arquivo_assinado_url.is_some()
    }
}

// --- Payloads ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GerarContrato {
    pub proposta_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AprovarContrato {
    pub parte: Parte,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssinarContrato {
    pub parte: Parte,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arquivo_url: Option<String>,
}

// Resposta de GET /contratos/proposta/{id}/pendencias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendenciasContrato {
    pub pode_gerar: bool,
    #[serde(default)]
    pub pendencias: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contrato(status: ContratoStatus) -> Contrato {
        Contrato {
            id: Uuid::new_v4(),
            proposta_id: Uuid::new_v4(),
            imovel_id: Uuid::new_v4(),
            conteudo: "CONTRATO DE COMPRA E VENDA".to_string(),
            status,
            gerado_por_ia: true,
            modelo_imobiliaria_id: None,
            aprovado_comprador: false,
            aprovado_vendedor: false,
            aprovado_imobiliaria: false,
            data_aprovacao_comprador: None,
            data_aprovacao_vendedor: None,
            data_aprovacao_imobiliaria: None,
            assinado_comprador: false,
            assinado_vendedor: false,
            data_assinatura_comprador: None,
            data_assinatura_vendedor: None,
            arquivo_assinado_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn aprovar_permitido_em_todos_os_estados_de_espera() {
        for status in [
            ContratoStatus::Pendente,
            ContratoStatus::EmAnalise,
            ContratoStatus::EmRevisao,
        ] {
            assert!(contrato(status).pode_aprovar(Parte::Comprador));
            assert!(contrato(status).pode_aprovar(Parte::Imobiliaria));
        }
        assert!(!contrato(ContratoStatus::Aprovado).pode_aprovar(Parte::Comprador));
        assert!(!contrato(ContratoStatus::Assinado).pode_aprovar(Parte::Comprador));
    }

    #[test]
    fn aprovar_uma_unica_vez_por_parte() {
        let mut c = contrato(ContratoStatus::EmAnalise);
        c.aprovado_vendedor = true;
        assert!(!c.pode_aprovar(Parte::Vendedor));
        assert!(c.pode_aprovar(Parte::Comprador));
    }

    #[test]
    fn assinar_exige_status_aprovado_e_aprovacao_da_parte() {
        let mut c = contrato(ContratoStatus::Aprovado);
        // Sem a própria aprovação, o botão de assinar não aparece.
        assert!(!c.pode_assinar(Parte::Comprador));

        c.aprovado_comprador = true;
        assert!(c.pode_assinar(Parte::Comprador));

        c.assinado_comprador = true;
        assert!(!c.pode_assinar(Parte::Comprador));

        // Fora de `aprovado`, nunca.
        let mut pendente = contrato(ContratoStatus::Pendente);
        pendente.aprovado_comprador = true;
        assert!(!pendente.pode_assinar(Parte::Comprador));
    }

    #[test]
    fn imobiliaria_nunca_assina() {
        let mut c = contrato(ContratoStatus::Aprovado);
        c.aprovado_imobiliaria = true;
        assert!(!c.pode_assinar(Parte::Imobiliaria));
    }

    #[test]
    fn derivados_do_painel() {
        assert!(contrato(ContratoStatus::Pendente).ativo());
        assert!(contrato(ContratoStatus::Aprovado).ativo());
        assert!(!contrato(ContratoStatus::Concluido).ativo());

        let mut c = contrato(ContratoStatus::Aprovado);
        assert!(c.aguardando_assinatura());
        c.assinado_comprador = true;
        assert!(c.aguardando_assinatura());
        c.assinado_vendedor = true;
        assert!(!c.aguardando_assinatura());
    }

    #[test]
    fn status_serializa_no_formato_da_api() {
        assert_eq!(
            serde_json::to_string(&ContratoStatus::EmAnalise).unwrap(),
            "\"em_analise\""
        );
        let de: ContratoStatus = serde_json::from_str("\"concluido\"").unwrap();
        assert_eq!(de, ContratoStatus::Concluido);
    }
}
