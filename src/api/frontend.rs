// src/api/frontend.rs
//
// Endpoints agregados do frontend: visões pré-juntadas do usuário logado,
// com contagem total no envelope.

use crate::api::client::{query_de, ApiClient, Pagina};
use crate::common::error::AppError;
use crate::models::frontend::{
    ContratoCompleto, FiltroContratos, FiltroImoveis, FiltroPropostas, ImobiliariaCompleta,
    ImovelCompleto, PropostaCompleta,
};

#[derive(Clone)]
pub struct FrontendApi {
    client: ApiClient,
}

impl FrontendApi {
    pub fn nova(client: ApiClient) -> Self {
        Self { client }
    }

    /// Imobiliária vinculada ao usuário logado, com corretores e
    /// estatísticas. `data: null` quando o usuário não tem imobiliária.
    pub async fn minha_imobiliaria(&self) -> Result<Option<ImobiliariaCompleta>, AppError> {
        self.client.get("/frontend/minha-imobiliaria", Vec::new()).await
    }

    pub async fn meus_imoveis(
        &self,
        filtro: Option<&FiltroImoveis>,
    ) -> Result<Pagina<ImovelCompleto>, AppError> {
        let query = filtro.map(query_de).unwrap_or_default();
        self.client.get_pagina("/frontend/meus-imoveis", query).await
    }

    pub async fn minhas_propostas(
        &self,
        filtro: Option<&FiltroPropostas>,
    ) -> Result<Pagina<PropostaCompleta>, AppError> {
        let query = filtro.map(query_de).unwrap_or_default();
        self.client
            .get_pagina("/frontend/minhas-propostas", query)
            .await
    }

    pub async fn meus_contratos(
        &self,
        filtro: Option<&FiltroContratos>,
    ) -> Result<Pagina<ContratoCompleto>, AppError> {
        let query = filtro.map(query_de).unwrap_or_default();
        self.client
            .get_pagina("/frontend/meus-contratos", query)
            .await
    }
}
