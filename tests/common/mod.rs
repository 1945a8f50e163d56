//! Fake ENADE backend served by axum on an ephemeral port

#![allow(dead_code)]

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use enade_dash::Config;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;

type Params = Query<HashMap<String, String>>;

pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

pub fn config_for(addr: SocketAddr) -> Config {
    Config {
        base_url: format!("http://{}", addr),
        timeout_secs: 5,
        ..Config::default()
    }
}

fn scores(noc: f64, nfc: f64, nac: f64, geral: f64) -> Value {
    json!({ "NOC": noc, "NFC": nfc, "NAC": nac, "GERAL": geral })
}

fn comparison() -> Value {
    json!({
        "UNIFOR": scores(4.2, 3.9, 4.0, 4.05),
        "CEARA": scores(4.0, 3.7, 3.8, 3.85),
        "NORDESTE": scores(3.9, 3.6, 3.7, 3.75),
        "BRASIL": scores(4.1, 3.8, 3.9, 3.95)
    })
}

fn institutions() -> Value {
    json!({
        "UNIFOR": scores(4.2, 3.9, 4.0, 4.05),
        "UFC": scores(4.4, 4.1, 4.2, 4.25),
        "UECE": { "NOC": 3.8, "GERAL": 3.6 }
    })
}

fn priorities() -> Value {
    json!([
        {
            "question": "Q55",
            "dimension": "NFC",
            "unifor_score": 3.5,
            "national_mean": 4.0,
            "gap_to_mean": -0.5,
            "percentile_rank": 12.0,
            "top_performer": { "institution": "UFC", "score": 5.2 }
        },
        {
            "question": "Q27",
            "dimension": "NOC",
            "unifor_score": 4.4,
            "national_mean": 4.1
        }
    ])
}

async fn areas() -> Json<Value> {
    Json(json!({
        "all_areas": ["DIREITO", "MEDICINA", "CIÊNCIA DA COMPUTAÇÃO"],
        "unifor_areas": ["DIREITO", "CIÊNCIA DA COMPUTAÇÃO"]
    }))
}

async fn dashboard_data() -> Json<Value> {
    Json(json!({
        "summary": { "total_courses": 8571, "unifor_courses": 31, "unifor_areas": 29 },
        "comparison_chart": comparison(),
        "unifor_performance": [
            { "area": "DIREITO", "noc": 4.3, "nfc": 4.0, "nac": 4.1, "media_geral": 4.15 },
            { "area": "MEDICINA", "noc": 4.6, "media_geral": 4.5 }
        ]
    }))
}

async fn comparisons() -> Json<Value> {
    Json(comparison())
}

async fn comprehensive_analysis() -> Json<Value> {
    Json(json!({
        "unifor_analysis": {
            "scores": scores(4.2, 3.9, 4.0, 4.05),
            "courses": [{ "area": "DIREITO", "noc": 4.3, "media_geral": 4.15 }]
        },
        "institutional_comparison": institutions(),
        "improvement_priorities": priorities()
    }))
}

async fn improvement_priorities() -> Json<Value> {
    Json(json!({ "priorities": priorities() }))
}

async fn institutional_comparison() -> Json<Value> {
    Json(institutions())
}

/// Echoes the decoded `area` back as an institution name
async fn extremes(Query(params): Params) -> impl IntoResponse {
    let Some(area) = params.get("area") else {
        return (StatusCode::BAD_REQUEST, "area required").into_response();
    };
    Json(json!({
        "menores": { "Q27": [[area, 2.1], ["UECE", 2.4]], "Q55": [["UVA", 1.9]] },
        "maiores": { "Q27": [["UFC", 5.6]], "Q55": [["UFC", 5.1]] }
    }))
    .into_response()
}

async fn similar_institutions() -> Json<Value> {
    Json(json!({ "institutions": ["UFC", "UECE"] }))
}

async fn metadata() -> Json<Value> {
    Json(json!({
        "total_courses": 8571,
        "unifor_courses": 31,
        "course_areas": ["DIREITO", "MEDICINA"],
        "unifor_areas": ["DIREITO"],
        "dimensions": {
            "NFC": { "name": "Infraestrutura", "questions": ["Q60", "Q55"] }
        }
    }))
}

async fn course_detail(Query(params): Params) -> impl IntoResponse {
    let Some(area) = params.get("area") else {
        return (StatusCode::BAD_REQUEST, "area required").into_response();
    };
    Json(json!({
        "course": {
            "codigo": 1234,
            "area": area,
            "participantes": 120.0,
            "media_geral": 4.15,
            "scores": scores(4.3, 4.0, 4.1, 4.15),
            "questions": { "Q55": 3.5, "Q27": 4.4 }
        },
        "extremes": { "menores": {}, "maiores": {} },
        "comparison": comparison()
    }))
    .into_response()
}

/// Backend answering every endpoint with valid data
pub fn healthy_backend() -> Router {
    Router::new()
        .route("/api/enade/areas", get(areas))
        .route("/api/enade/metadata", get(metadata))
        .route("/api/enade/dashboard-data", get(dashboard_data))
        .route("/api/enade/comparisons", get(comparisons))
        .route("/api/enade/comprehensive-analysis", get(comprehensive_analysis))
        .route("/api/enade/improvement-priorities", get(improvement_priorities))
        .route("/api/enade/institutional-comparison", get(institutional_comparison))
        .route("/api/enade/extremes", get(extremes))
        .route("/api/enade/similar-institutions", get(similar_institutions))
        .route("/api/enade/course-detail", get(course_detail))
}

/// Backend whose endpoints fail in distinct ways
pub fn broken_backend() -> Router {
    Router::new()
        .route("/api/enade/areas", get(areas))
        .route(
            "/api/enade/comparisons",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
        .route("/api/enade/dashboard-data", get(|| async { "<html>not json</html>" }))
        .route(
            "/api/enade/improvement-priorities",
            get(|| async {
                Json(json!({
                    "priorities": [
                        { "question": "Q55", "unifor_score": 9.5, "national_mean": 4.0 }
                    ]
                }))
            }),
        )
        .route(
            "/api/enade/similar-institutions",
            get(|| async { Json(json!({ "institutions": ["UFC"] })) }),
        )
}
