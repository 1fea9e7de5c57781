// src/services/contrato_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::api::client::Pagina;
use crate::api::{ContratosApi, FrontendApi, TemplatesApi};
use crate::cache::{segmento_de_filtro, ttl, CacheConsultas, ChaveConsulta, Mutacao};
use crate::common::error::AppError;
use crate::models::contrato::{Contrato, PendenciasContrato};
use crate::models::frontend::{ContratoCompleto, FiltroContratos};
use crate::models::proposta::{Parte, Proposta};
use crate::models::template::{AtualizarTemplate, ContratoTemplate, NovoTemplate};

#[derive(Clone)]
pub struct ContratoService {
    api: ContratosApi,
    templates: TemplatesApi,
    frontend: FrontendApi,
    cache: CacheConsultas,
}

impl ContratoService {
    pub fn novo(
        api: ContratosApi,
        templates: TemplatesApi,
        frontend: FrontendApi,
        cache: CacheConsultas,
    ) -> Self {
        Self {
            api,
            templates,
            frontend,
            cache,
        }
    }

    // --- Leituras ---

    pub async fn listar(
        &self,
        filtro: Option<&FiltroContratos>,
    ) -> Result<Vec<Contrato>, AppError> {
        let chave = ChaveConsulta::nova(["contratos".to_string(), segmento_de_filtro(filtro)]);
        let api = self.api.clone();
        let filtro = filtro.cloned();
        self.cache
            .obter_ou_buscar(chave, ttl::PADRAO, move || {
                let api = api.clone();
                let filtro = filtro.clone();
                async move { api.listar(filtro.as_ref()).await }
            })
            .await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Contrato, AppError> {
        let chave = ChaveConsulta::nova(["contratos".to_string(), id.to_string()]);
        let api = self.api.clone();
        self.cache
            .obter_ou_buscar(chave, ttl::PADRAO, move || {
                let api = api.clone();
                async move { api.buscar(id).await }
            })
            .await
    }

    pub async fn meus(
        &self,
        filtro: Option<&FiltroContratos>,
    ) -> Result<Pagina<ContratoCompleto>, AppError> {
        let chave = ChaveConsulta::nova([
            "frontend".to_string(),
            "meus-contratos".to_string(),
            segmento_de_filtro(filtro),
        ]);
        let api = self.frontend.clone();
        let filtro = filtro.cloned();
        self.cache
            .obter_ou_buscar(chave, ttl::MEUS_CONTRATOS, move || {
                let api = api.clone();
                let filtro = filtro.clone();
                async move { api.meus_contratos(filtro.as_ref()).await }
            })
            .await
    }

    /// Checagem prévia do servidor: o que ainda falta para gerar o
    /// contrato desta proposta.
    pub async fn verificar_pendencias(
        &self,
        proposta_id: Uuid,
    ) -> Result<PendenciasContrato, AppError> {
        self.api.verificar_pendencias(proposta_id).await
    }

    // --- Mutações ---

    /// Gera o contrato a partir de uma proposta aprovada. O texto nasce no
    /// servidor (IA ou template ativo da imobiliária); o guard local só
    /// evita oferecer a ação fora de hora.
    pub async fn gerar(
        &self,
        proposta: &Proposta,
        ja_tem_contrato: bool,
    ) -> Result<Contrato, AppError> {
        if !proposta.pode_gerar_contrato(ja_tem_contrato) {
            return Err(AppError::RegraDeNegocio(
                "A proposta precisa estar aprovada e ainda sem contrato.".to_string(),
            ));
        }
        let contrato = self.api.gerar(proposta.id).await?;
        self.cache.invalidar_mutacao(Mutacao::GerarContrato).await;
        tracing::info!(
            "Contrato {} gerado para a proposta {}",
            contrato.id,
            proposta.id
        );
        Ok(contrato)
    }

    pub async fn aprovar(&self, contrato: &Contrato, parte: Parte) -> Result<Contrato, AppError> {
        if !contrato.pode_aprovar(parte) {
            return Err(AppError::RegraDeNegocio(
                "Esta parte não pode aprovar o contrato neste estado.".to_string(),
            ));
        }
        let atualizado = self.api.aprovar(contrato.id, parte).await?;
        self.cache.invalidar_mutacao(Mutacao::AprovarContrato).await;
        Ok(atualizado)
    }

    pub async fn assinar(
        &self,
        contrato: &Contrato,
        parte: Parte,
        arquivo_url: Option<String>,
    ) -> Result<Contrato, AppError> {
        if !contrato.pode_assinar(parte) {
            return Err(AppError::RegraDeNegocio(
                "O contrato precisa estar aprovado e a assinatura ainda pendente.".to_string(),
            ));
        }
        let atualizado = self.api.assinar(contrato.id, parte, arquivo_url).await?;
        self.cache.invalidar_mutacao(Mutacao::AssinarContrato).await;
        tracing::info!(
            "Contrato {} assinado pelo {} (status atual: {:?})",
            atualizado.id,
            parte.as_str(),
            atualizado.status
        );
        Ok(atualizado)
    }

    // --- Templates da imobiliária ---

    pub async fn listar_templates(
        &self,
        imobiliaria_id: Uuid,
        apenas_ativos: bool,
    ) -> Result<Vec<ContratoTemplate>, AppError> {
        let chave = ChaveConsulta::nova([
            "templates".to_string(),
            imobiliaria_id.to_string(),
            apenas_ativos.to_string(),
        ]);
        let api = self.templates.clone();
        self.cache
            .obter_ou_buscar(chave, ttl::PADRAO, move || {
                let api = api.clone();
                async move { api.listar_por_imobiliaria(imobiliaria_id, apenas_ativos).await }
            })
            .await
    }

    /// Template ativo da imobiliária, ou nenhum.
    pub async fn template_ativo(
        &self,
        imobiliaria_id: Uuid,
    ) -> Result<Option<ContratoTemplate>, AppError> {
        match self.templates.buscar_ativo(imobiliaria_id).await {
            Ok(template) => Ok(Some(template)),
            Err(AppError::NaoEncontrado) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn criar_template(&self, dados: &NovoTemplate) -> Result<ContratoTemplate, AppError> {
        dados.validate()?;
        let template = self.templates.criar(dados).await?;
        self.cache.invalidar_mutacao(Mutacao::CriarTemplate).await;
        Ok(template)
    }

    pub async fn atualizar_template(
        &self,
        id: Uuid,
        dados: &AtualizarTemplate,
    ) -> Result<ContratoTemplate, AppError> {
        let template = self.templates.atualizar(id, dados).await?;
        self.cache
            .invalidar_mutacao(Mutacao::AtualizarTemplate)
            .await;
        Ok(template)
    }

    pub async fn ativar_template(&self, id: Uuid) -> Result<ContratoTemplate, AppError> {
        let template = self.templates.ativar(id).await?;
        self.cache.invalidar_mutacao(Mutacao::AtivarTemplate).await;
        Ok(template)
    }

    pub async fn desativar_template(&self, id: Uuid) -> Result<ContratoTemplate, AppError> {
        let template = self.templates.desativar(id).await?;
        self.cache
            .invalidar_mutacao(Mutacao::DesativarTemplate)
            .await;
        Ok(template)
    }

    pub async fn deletar_template(&self, id: Uuid) -> Result<(), AppError> {
        self.templates.deletar(id).await?;
        self.cache.invalidar_mutacao(Mutacao::DeletarTemplate).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ApiClient;
    use crate::api::test_support::{nova_proposta, ServidorFake};
    use crate::api::PropostasApi;
    use crate::auth::session::SessaoStore;
    use crate::models::contrato::ContratoStatus;
    use crate::models::proposta::PropostaStatus;
    use crate::services::PropostaService;

    fn servicos() -> (PropostaService, ContratoService) {
        let servidor = ServidorFake::novo();
        let client = ApiClient::novo(servidor, SessaoStore::novo());
        let cache = CacheConsultas::novo();
        let propostas = PropostaService::novo(
            PropostasApi::nova(client.clone()),
            FrontendApi::nova(client.clone()),
            cache.clone(),
        );
        let contratos = ContratoService::novo(
            ContratosApi::nova(client.clone()),
            TemplatesApi::nova(client.clone()),
            FrontendApi::nova(client),
            cache,
        );
        (propostas, contratos)
    }

    async fn proposta_aprovada(propostas: &PropostaService) -> Proposta {
        let proposta = propostas.criar(&nova_proposta()).await.unwrap();
        let enviada = propostas.enviar(&proposta).await.unwrap();
        let parcial = propostas.aprovar(&enviada, Parte::Comprador).await.unwrap();
        propostas.aprovar(&parcial, Parte::Vendedor).await.unwrap()
    }

    #[tokio::test]
    async fn ciclo_completo_da_proposta_ao_contrato() {
        let (propostas, contratos) = servicos();

        let aprovada = proposta_aprovada(&propostas).await;
        assert_eq!(aprovada.status, PropostaStatus::Aprovada);

        let contrato = contratos.gerar(&aprovada, false).await.unwrap();
        assert_eq!(contrato.proposta_id, aprovada.id);
        assert_eq!(contrato.imovel_id, aprovada.imovel_id);
        assert_eq!(contrato.status, ContratoStatus::Pendente);
    }

    #[tokio::test]
    async fn gerar_contrato_barrado_antes_da_aprovacao() {
        let (propostas, contratos) = servicos();

        let proposta = propostas.criar(&nova_proposta()).await.unwrap();
        assert!(matches!(
            contratos.gerar(&proposta, false).await,
            Err(AppError::RegraDeNegocio(_))
        ));

        // Com contrato já existente, também não.
        let aprovada = proposta_aprovada(&propostas).await;
        assert!(matches!(
            contratos.gerar(&aprovada, true).await,
            Err(AppError::RegraDeNegocio(_))
        ));
    }

    #[tokio::test]
    async fn aprovacoes_e_assinaturas_seguem_a_progressao() {
        let (propostas, contratos) = servicos();

        let aprovada = proposta_aprovada(&propostas).await;
        let contrato = contratos.gerar(&aprovada, false).await.unwrap();

        // Assinar antes de aprovar: barrado localmente.
        assert!(matches!(
            contratos.assinar(&contrato, Parte::Comprador, None).await,
            Err(AppError::RegraDeNegocio(_))
        ));

        let c1 = contratos.aprovar(&contrato, Parte::Comprador).await.unwrap();
        assert!(c1.aprovado_comprador);
        assert!(c1.data_aprovacao_comprador.is_some());
        assert_eq!(c1.status, ContratoStatus::Pendente);

        let c2 = contratos.aprovar(&c1, Parte::Vendedor).await.unwrap();
        // Ambas as partes aprovaram: o servidor promoveu para `aprovado`.
        assert_eq!(c2.status, ContratoStatus::Aprovado);

        let c3 = contratos
            .assinar(&c2, Parte::Comprador, None)
            .await
            .unwrap();
        assert!(c3.assinado_comprador);
        assert!(c3.data_assinatura_comprador.is_some());

        let c4 = contratos
            .assinar(
                &c3,
                Parte::Vendedor,
                Some("https://arquivos/contrato-final.pdf".to_string()),
            )
            .await
            .unwrap();
        assert!(c4.assinado_vendedor);
        assert_eq!(c4.status, ContratoStatus::Assinado);
        assert_eq!(
            c4.arquivo_assinado_url.as_deref(),
            Some("https://arquivos/contrato-final.pdf")
        );

        // Assinatura repetida é barrada pelo guard.
        assert!(matches!(
            contratos.assinar(&c4, Parte::Vendedor, None).await,
            Err(AppError::RegraDeNegocio(_))
        ));
    }
}
