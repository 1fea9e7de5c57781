//src/main.rs

use realcloser_client::config::AppState;
use realcloser_client::models::auth::Credenciais;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve
    // iniciar.
    let app_state = AppState::novo().expect("Falha ao inicializar o estado da aplicação.");

    // Bootstrap da sessão: com credenciais no ambiente, faz login direto.
    // Sem elas não há o que mostrar: o painel inteiro é autenticado.
    let email = std::env::var("REALCLOSER_EMAIL").ok();
    let senha = std::env::var("REALCLOSER_SENHA").ok();
    let (Some(email), Some(senha)) = (email, senha) else {
        tracing::error!("Defina REALCLOSER_EMAIL e REALCLOSER_SENHA para entrar.");
        std::process::exit(1);
    };

    app_state
        .auth
        .entrar(&Credenciais { email, senha })
        .await
        .expect("Falha ao autenticar no provedor de identidade.");

    // Um resumo do painel, como a tela inicial faria.
    match app_state.dashboard.resumo().await {
        Ok(resumo) => {
            tracing::info!(
                "🏠 Imóveis: {} no total, {} com proposta, {} vendidos",
                resumo.imoveis.total,
                resumo.imoveis.com_proposta,
                resumo.imoveis.vendidos
            );
            tracing::info!(
                "📄 Contratos: {} ativos, {} aguardando assinatura, {} concluídos",
                resumo.contratos.ativos,
                resumo.contratos.aguardando_assinatura,
                resumo.contratos.concluidos
            );
            tracing::info!(
                "🤝 Propostas: {} no total, {} em andamento, {} aprovadas",
                resumo.propostas.total,
                resumo.propostas.em_andamento,
                resumo.propostas.aprovadas
            );
            tracing::info!(
                "📎 Pendências de documentação: {}",
                resumo.pendencias.documentacao
            );
        }
        Err(e) => {
            tracing::error!("Falha ao montar o resumo: {}", e.mensagem_para_usuario());
        }
    }

    app_state
        .sair()
        .await
        .expect("Falha ao encerrar a sessão.");
}
