// src/models/dashboard.rs

use serde::Serialize;

// 1. Imóveis (os cards do topo)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EstatisticasImoveis {
    pub total: usize,
    pub com_proposta: usize, // Imóveis distintos com pelo menos uma proposta
    pub vendidos: usize,
}

// 2. Contratos
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EstatisticasContratos {
    pub ativos: usize,
    pub aguardando_assinatura: usize,
    pub concluidos: usize,
}

// 3. Propostas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EstatisticasPropostas {
    pub total: usize,
    pub em_andamento: usize,
    pub aprovadas: usize,
}

// 4. Pendências
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pendencias {
    pub documentacao: usize,
}

// Agregado completo exibido no painel. Derivado por filtragem pura das
// listas buscadas; não é persistido em lugar nenhum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EstatisticasPainel {
    pub imoveis: EstatisticasImoveis,
    pub contratos: EstatisticasContratos,
    pub propostas: EstatisticasPropostas,
    pub pendencias: Pendencias,
}
