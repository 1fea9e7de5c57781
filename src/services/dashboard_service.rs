// src/services/dashboard_service.rs
//
// Estatísticas do painel: função pura sobre as listas buscadas. Nada aqui
// é máquina de estados, só filtragem e contagem, determinística e
// independente de ordem, calculada a cada chamada e nunca persistida.

use std::collections::BTreeSet;

use crate::common::error::AppError;
use crate::models::contrato::Contrato;
use crate::models::dashboard::{
    EstatisticasContratos, EstatisticasImoveis, EstatisticasPainel, EstatisticasPropostas,
    Pendencias,
};
use crate::models::documento::{Documento, EntidadeTipo};
use crate::models::imovel::Imovel;
use crate::models::proposta::{Proposta, PropostaStatus};
use crate::services::{ContratoService, DocumentoService, ImovelService, PropostaService};

/// Deriva os contadores do painel a partir das listas já buscadas.
pub fn calcular_estatisticas(
    imoveis: &[Imovel],
    propostas: &[Proposta],
    contratos: &[Contrato],
    documentos: &[Documento],
) -> EstatisticasPainel {
    let imoveis_com_proposta: BTreeSet<_> = propostas.iter().map(|p| p.imovel_id).collect();

    EstatisticasPainel {
        imoveis: EstatisticasImoveis {
            total: imoveis.len(),
            com_proposta: imoveis_com_proposta.len(),
            vendidos: imoveis.iter().filter(|i| i.vendido()).count(),
        },
        contratos: EstatisticasContratos {
            ativos: contratos.iter().filter(|c| c.ativo()).count(),
            aguardando_assinatura: contratos
                .iter()
                .filter(|c| c.aguardando_assinatura())
                .count(),
            concluidos: contratos.iter().filter(|c| c.concluido()).count(),
        },
        propostas: EstatisticasPropostas {
            total: propostas.len(),
            em_andamento: propostas.iter().filter(|p| p.em_andamento()).count(),
            aprovadas: propostas
                .iter()
                .filter(|p| p.status == PropostaStatus::Aprovada)
                .count(),
        },
        pendencias: Pendencias {
            documentacao: documentos
                .iter()
                .filter(|d| d.pendente_de_verificacao())
                .count(),
        },
    }
}

#[derive(Clone)]
pub struct DashboardService {
    imoveis: ImovelService,
    propostas: PropostaService,
    contratos: ContratoService,
    documentos: DocumentoService,
}

impl DashboardService {
    pub fn novo(
        imoveis: ImovelService,
        propostas: PropostaService,
        contratos: ContratoService,
        documentos: DocumentoService,
    ) -> Self {
        Self {
            imoveis,
            propostas,
            contratos,
            documentos,
        }
    }

    /// Busca as três listas em paralelo (respeitando os caches de cada
    /// uma) e deriva os contadores. As pendências de documentação vêm dos
    /// imóveis referenciados pelos contratos; a falha de uma dessas buscas
    /// não derruba o resumo; o imóvel só fica de fora da contagem.
    pub async fn resumo(&self) -> Result<EstatisticasPainel, AppError> {
        let (imoveis, propostas, contratos) = tokio::try_join!(
            self.imoveis.listar(None),
            self.propostas.listar(None),
            self.contratos.listar(None),
        )?;

        let imoveis_dos_contratos: BTreeSet<_> =
            contratos.iter().map(|c| c.imovel_id).collect();

        let mut documentos = Vec::new();
        for imovel_id in imoveis_dos_contratos {
            match self
                .documentos
                .listar_por_entidade(EntidadeTipo::Imovel, imovel_id)
                .await
            {
                Ok(mut docs) => documentos.append(&mut docs),
                Err(e) => {
                    tracing::warn!("Falha ao buscar documentos do imóvel {}: {}", imovel_id, e);
                }
            }
        }

        Ok(calcular_estatisticas(
            &imoveis,
            &propostas,
            &contratos,
            &documentos,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contrato::ContratoStatus;
    use crate::models::documento::DocumentoStatus;
    use crate::models::imovel::ImovelStatus;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn imovel(status: ImovelStatus) -> Imovel {
        Imovel {
            id: Uuid::new_v4(),
            imobiliaria_id: Uuid::new_v4(),
            titulo: "Casa no centro".to_string(),
            descricao: None,
            endereco: "Rua das Flores, 100".to_string(),
            cidade: "Curitiba".to_string(),
            estado: "PR".to_string(),
            cep: None,
            preco: Decimal::new(350_000, 0),
            area_total: None,
            area_construida: None,
            quartos: Some(3),
            banheiros: Some(2),
            vagas_garagem: Some(1),
            matricula_numero: None,
            cartorio: None,
            comarca: None,
            status,
            imagens: None,
            caracteristicas: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn proposta(status: PropostaStatus, imovel_id: Uuid) -> Proposta {
        Proposta {
            id: Uuid::new_v4(),
            imovel_id,
            comprador_id: Uuid::new_v4(),
            vendedor_id: Uuid::new_v4(),
            corretor_id: None,
            imobiliaria_id: Uuid::new_v4(),
            valor: Decimal::new(300_000, 0),
            forma_pagamento: "à vista".to_string(),
            relato_negociacao: None,
            bens_que_ficam: None,
            data_posse: None,
            status,
            aprovado_comprador: false,
            aprovado_vendedor: false,
            data_aprovacao_comprador: None,
            data_aprovacao_vendedor: None,
            observacoes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn contrato(status: ContratoStatus, assinado_comprador: bool) -> Contrato {
        Contrato {
            id: Uuid::new_v4(),
            proposta_id: Uuid::new_v4(),
            imovel_id: Uuid::new_v4(),
            conteudo: String::new(),
            status,
            gerado_por_ia: false,
            modelo_imobiliaria_id: None,
            aprovado_comprador: true,
            aprovado_vendedor: true,
            aprovado_imobiliaria: false,
            data_aprovacao_comprador: None,
            data_aprovacao_vendedor: None,
            data_aprovacao_imobiliaria: None,
            assinado_comprador,
            assinado_vendedor: false,
            data_assinatura_comprador: None,
            data_assinatura_vendedor: None,
            arquivo_assinado_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn documento(status: DocumentoStatus) -> Documento {
        Documento {
            id: Uuid::new_v4(),
            entidade_tipo: EntidadeTipo::Imovel,
            entidade_id: Uuid::new_v4(),
            tipo_documento: "matricula".to_string(),
            nome: "Matrícula atualizada".to_string(),
            descricao: None,
            url: "https://arquivos/matricula.pdf".to_string(),
            nome_arquivo: None,
            tamanho_arquivo: None,
            mime_type: None,
            data_emissao: None,
            data_validade: None,
            status,
            enviado_por: None,
            verificado_por: None,
            data_verificacao: None,
            observacoes: None,
            metadata: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn cenario_de_tres_contratos() {
        // pendente e aprovado sem assinatura do comprador; concluído à parte.
        let contratos = vec![
            contrato(ContratoStatus::Pendente, false),
            contrato(ContratoStatus::Aprovado, false),
            contrato(ContratoStatus::Concluido, true),
        ];
        let stats = calcular_estatisticas(&[], &[], &contratos, &[]);

        assert_eq!(stats.contratos.ativos, 2);
        assert_eq!(stats.contratos.aguardando_assinatura, 1);
        assert_eq!(stats.contratos.concluidos, 1);
    }

    #[test]
    fn contagem_e_independente_de_ordem() {
        let imovel_a = imovel(ImovelStatus::Disponivel);
        let imovel_b = imovel(ImovelStatus::Vendido);
        let imoveis = vec![imovel_a.clone(), imovel_b.clone()];

        // Duas propostas no mesmo imóvel contam um único imóvel com proposta.
        let propostas = vec![
            proposta(PropostaStatus::Enviada, imovel_a.id),
            proposta(PropostaStatus::Rascunho, imovel_a.id),
            proposta(PropostaStatus::Aprovada, imovel_b.id),
        ];
        let contratos = vec![
            contrato(ContratoStatus::EmAnalise, false),
            contrato(ContratoStatus::Concluido, true),
        ];
        let documentos = vec![
            documento(DocumentoStatus::Pendente),
            documento(DocumentoStatus::Enviado),
            documento(DocumentoStatus::Aprovado),
        ];

        let direto = calcular_estatisticas(&imoveis, &propostas, &contratos, &documentos);

        let mut imoveis_rev = imoveis.clone();
        imoveis_rev.reverse();
        let mut propostas_rev = propostas.clone();
        propostas_rev.reverse();
        let mut contratos_rev = contratos.clone();
        contratos_rev.reverse();
        let invertido =
            calcular_estatisticas(&imoveis_rev, &propostas_rev, &contratos_rev, &documentos);

        assert_eq!(direto, invertido);
        assert_eq!(direto.imoveis.total, 2);
        assert_eq!(direto.imoveis.com_proposta, 2);
        assert_eq!(direto.imoveis.vendidos, 1);
        assert_eq!(direto.propostas.total, 3);
        assert_eq!(direto.propostas.em_andamento, 3);
        assert_eq!(direto.propostas.aprovadas, 1);
        assert_eq!(direto.pendencias.documentacao, 2);
    }

    #[test]
    fn proposta_aprovada_com_flags_pendentes_conta_como_em_andamento() {
        let mut aprovada_sem_flags = proposta(PropostaStatus::Aprovada, Uuid::new_v4());
        assert!(aprovada_sem_flags.em_andamento());

        aprovada_sem_flags.aprovado_comprador = true;
        assert!(!aprovada_sem_flags.em_andamento());
    }

    #[test]
    fn listas_vazias_zeram_tudo() {
        let stats = calcular_estatisticas(&[], &[], &[], &[]);
        assert_eq!(stats, EstatisticasPainel::default());
    }
}
