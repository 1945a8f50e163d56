mod common;

use common::{broken_backend, config_for, healthy_backend, serve};
use enade_dash::api::ApiClient;
use enade_dash::commands;

#[tokio::test]
async fn test_overview_report() {
    let addr = serve(healthy_backend()).await;
    let text = commands::report(&config_for(addr), None).await.unwrap();

    assert!(text.starts_with("ENADE - Visão Geral"));
    assert!(text.contains("8.571"));
    assert!(text.contains("Instituições Similares"));
    assert!(text.contains("- UECE"));
    assert!(!text.contains("Erro ao carregar"));
    assert!(!text.contains("Extremos"));
}

#[tokio::test]
async fn test_area_report_includes_extremes() {
    let addr = serve(healthy_backend()).await;
    let text = commands::report(&config_for(addr), Some("DIREITO")).await.unwrap();

    assert!(text.starts_with("ENADE - DIREITO"));
    assert!(text.contains("Extremos - DIREITO"));
    assert!(text.contains("Q27"));
    assert!(!text.contains("Erro ao carregar"));
}

#[tokio::test]
async fn test_area_report_has_no_loading_widgets() {
    let addr = serve(healthy_backend()).await;
    let text = commands::report(&config_for(addr), Some("DIREITO")).await.unwrap();

    assert!(!text.contains("(carregando)"));
    assert!(text.contains("Total de Cursos: 8.571"));
    assert!(text.contains("Dimensões por Curso"));
    assert!(text.contains("Média Geral por Curso"));
    assert!(text.contains("Comparação por Dimensão"));
}

#[tokio::test]
async fn test_failures_become_placeholders() {
    let addr = serve(broken_backend()).await;
    let text = commands::report(&config_for(addr), None).await.unwrap();

    assert!(text.contains("Erro ao carregar dados do dashboard"));
    assert!(text.contains("Erro ao carregar prioridades de melhoria"));
    assert!(text.contains("Erro ao carregar comparação institucional"));
    // Independent widgets still render
    assert!(text.contains("- UFC"));
}

#[tokio::test]
async fn test_course_and_metadata_output() {
    let addr = serve(healthy_backend()).await;
    let client = ApiClient::new(&config_for(addr)).unwrap();

    let detail = client.course_detail("DIREITO").await.unwrap();
    let course = commands::format_course(&detail);
    assert!(course.starts_with("DIREITO"));
    assert!(course.contains("Código: 1234"));
    let q27 = course.find("Q27").unwrap();
    let q55 = course.find("Q55").unwrap();
    assert!(q27 < q55);

    let metadata = commands::format_metadata(&client.metadata().await.unwrap());
    assert!(metadata.contains("NFC - Infraestrutura"));
    assert!(metadata.contains("Q55, Q60"));
}
