//! HTTP-level tests for `GET /histori`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, kolam_request, post_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_history_is_an_empty_list(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/histori").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn history_lists_newest_first_with_wire_names(pool: SqlitePool) {
    let mut taman = kolam_request();
    taman["jenis_proyek"] = json!("taman");
    taman["cuaca"] = json!("hujan");

    let first = post_json(common::build_test_app(pool.clone()), "/estimasi", kolam_request()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = post_json(common::build_test_app(pool.clone()), "/estimasi", taman).await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let response = get(common::build_test_app(pool), "/histori").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["jenis_proyek"], "taman");
    assert_eq!(rows[0]["cuaca"], "hujan");
    assert_eq!(rows[1]["jenis_proyek"], "kolam");
    assert!(rows[0]["id"].as_i64().unwrap() > rows[1]["id"].as_i64().unwrap());

    let kolam = &rows[1];
    assert!(kolam["tanggal"].is_string());
    assert_eq!(kolam["luas_m2"], 30.0);
    assert_eq!(kolam["tingkat_detail"], 4);
    assert_eq!(kolam["jarak_km"], 20.0);
    assert_eq!(kolam["durasi_hari"], 15);
    assert_eq!(kolam["jumlah_pekerja"], 3);
    assert_eq!(kolam["biaya_produksi"], 28_405_000);
    assert_eq!(kolam["nilai_margin"], 5_681_000);
    assert_eq!(kolam["harga_sebelum_diskon"], 34_086_000);
    assert_eq!(kolam["diskon"], 0.0);
    assert_eq!(kolam["nilai_diskon"], 0);
    assert_eq!(kolam["harga_final"], 34_086_000);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rejected_requests_leave_no_history(pool: SqlitePool) {
    let mut body = kolam_request();
    body["jenis_proyek"] = json!("kincir");
    let response = post_json(common::build_test_app(pool.clone()), "/estimasi", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = get(common::build_test_app(pool), "/histori").await;
    assert_eq!(body_json(response).await["data"], json!([]));
}
