//! In-memory stand-in for the vscale REST API.
//!
//! Implements enough of the remote surface to exercise every binding in
//! `vscale-core` over real HTTP: token-gated routes, CRUD state for
//! scalets, tags, SSH keys, backups, domains and records, and static
//! fixtures for the account, catalog, and billing endpoints. Every route
//! requires an `X-Token` header; requests without one get 403.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scalet {
    pub ctid: u64,
    pub name: String,
    pub status: String,
    pub rplan: String,
    pub made_from: String,
    pub location: String,
    pub keys: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub scalets: Vec<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub name: String,
    pub key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Backup {
    pub id: String,
    pub name: String,
    pub scalet: u64,
    pub location: String,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub name: String,
    pub tags: Vec<u64>,
}

#[derive(Deserialize)]
struct ScaletCreate {
    name: String,
    make_from: String,
    rplan: String,
    do_start: bool,
    location: String,
    #[allow(dead_code)]
    password: Option<String>,
    keys: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct TagBody {
    name: String,
    scalets: Option<Vec<u64>>,
}

#[derive(Deserialize)]
struct KeysBody {
    keys: Vec<String>,
}

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

#[derive(Deserialize)]
struct PasswordBody {
    #[allow(dead_code)]
    password: String,
}

#[derive(Deserialize)]
struct MakeFromBody {
    make_from: String,
}

#[derive(Deserialize)]
struct RplanBody {
    rplan: String,
}

#[derive(Deserialize)]
struct DestinationBody {
    destination: String,
}

#[derive(Deserialize)]
struct SshKeyCreate {
    name: String,
    key: String,
}

#[derive(Deserialize)]
struct NotifyBody {
    notify_balance: i64,
}

#[derive(Deserialize)]
struct DomainCreate {
    name: String,
    #[allow(dead_code)]
    bind_zone: Option<String>,
}

#[derive(Deserialize)]
struct DomainTags {
    tags: Vec<u64>,
}

#[derive(Deserialize)]
struct ConsumptionRange {
    start: String,
    end: String,
}

#[derive(Default)]
pub struct Store {
    scalets: HashMap<u64, Scalet>,
    tags: HashMap<u64, Tag>,
    ssh_keys: HashMap<u64, SshKey>,
    backups: HashMap<String, Backup>,
    domains: HashMap<u64, Domain>,
    records: HashMap<u64, HashMap<u64, Value>>,
    notify_balance: i64,
    last_id: u64,
}

impl Store {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/v1/account", get(account))
        .route("/v1/tasks", get(tasks))
        .route("/v1/scalets", get(list_scalets).post(create_scalet))
        .route("/v1/scalets/tags", get(list_tags).post(create_tag))
        .route(
            "/v1/scalets/tags/{id}",
            get(get_tag).put(update_tag).delete(delete_tag),
        )
        .route(
            "/v1/scalets/{ctid}",
            get(get_scalet).patch(attach_keys).delete(delete_scalet),
        )
        .route("/v1/scalets/{ctid}/restart", patch(restart_scalet))
        .route("/v1/scalets/{ctid}/stop", patch(stop_scalet))
        .route("/v1/scalets/{ctid}/start", patch(start_scalet))
        .route(
            "/v1/scalets/{ctid}/rebuild",
            patch(rebuild_scalet).post(restore_scalet),
        )
        .route("/v1/scalets/{ctid}/upgrade", post(upgrade_scalet))
        .route("/v1/scalets/{ctid}/backup", post(create_backup))
        .route("/v1/backups", get(list_backups))
        .route("/v1/backups/{id}", get(get_backup).delete(delete_backup))
        .route("/v1/backups/{id}/relocate", post(relocate_backup))
        .route("/v1/locations", get(locations))
        .route("/v1/images", get(images))
        .route("/v1/rplans", get(rplans))
        .route("/v1/billing/prices", get(prices))
        .route("/v1/billing/notify", get(get_notify).put(set_notify))
        .route("/v1/billing/balance", get(balance))
        .route("/v1/billing/payments", get(payments))
        .route("/v1/billing/consumption", get(consumption))
        .route("/v1/sshkeys", get(list_ssh_keys).post(create_ssh_key))
        .route("/v1/sshkeys/{id}", delete(delete_ssh_key))
        .route("/v1/domains/", get(list_domains).post(create_domain))
        .route(
            "/v1/domains/{id}",
            get(get_domain).patch(update_domain).delete(delete_domain),
        )
        .route(
            "/v1/domains/{id}/records/",
            get(list_records).post(create_record),
        )
        .route(
            "/v1/domains/{id}/records/{rid}",
            get(get_record).put(update_record).delete(delete_record),
        )
        .layer(middleware::from_fn(require_token))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reject any request lacking the `X-Token` header with 403, like the
/// real service does for unauthenticated calls.
async fn require_token(req: Request, next: Next) -> Result<Response, StatusCode> {
    if req.headers().get("x-token").is_none() {
        tracing::info!(uri = %req.uri(), "rejected tokenless request");
        return Err(StatusCode::FORBIDDEN);
    }
    tracing::info!(method = %req.method(), uri = %req.uri(), "handling request");
    Ok(next.run(req).await)
}

// --- account / tasks ---

async fn account() -> Json<Value> {
    Json(json!({
        "info": {
            "name": "Mock User",
            "email": "mock@example.com",
            "actdate": "2015-07-07 09:29:06",
            "state": "1",
        }
    }))
}

async fn tasks() -> Json<Value> {
    Json(json!([]))
}

// --- scalets ---

async fn list_scalets(State(db): State<Db>) -> Json<Vec<Scalet>> {
    let store = db.read().await;
    Json(store.scalets.values().cloned().collect())
}

async fn create_scalet(
    State(db): State<Db>,
    Json(input): Json<ScaletCreate>,
) -> (StatusCode, Json<Scalet>) {
    let mut store = db.write().await;
    let ctid = store.next_id();
    let scalet = Scalet {
        ctid,
        name: input.name,
        status: if input.do_start { "started" } else { "stopped" }.to_string(),
        rplan: input.rplan,
        made_from: input.make_from,
        location: input.location,
        keys: input.keys.unwrap_or_default(),
    };
    store.scalets.insert(ctid, scalet.clone());
    (StatusCode::CREATED, Json(scalet))
}

async fn get_scalet(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
) -> Result<Json<Scalet>, StatusCode> {
    let store = db.read().await;
    store
        .scalets
        .get(&ctid)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_scalet(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .scalets
        .remove(&ctid)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn attach_keys(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
    Json(input): Json<KeysBody>,
) -> Result<Json<Scalet>, StatusCode> {
    let mut store = db.write().await;
    let scalet = store.scalets.get_mut(&ctid).ok_or(StatusCode::NOT_FOUND)?;
    scalet.keys = input.keys;
    Ok(Json(scalet.clone()))
}

async fn set_status(db: &Db, ctid: u64, status: &str) -> Result<Json<Scalet>, StatusCode> {
    let mut store = db.write().await;
    let scalet = store.scalets.get_mut(&ctid).ok_or(StatusCode::NOT_FOUND)?;
    scalet.status = status.to_string();
    Ok(Json(scalet.clone()))
}

async fn restart_scalet(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
    Json(_body): Json<Value>,
) -> Result<Json<Scalet>, StatusCode> {
    set_status(&db, ctid, "started").await
}

async fn stop_scalet(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
    Json(_body): Json<Value>,
) -> Result<Json<Scalet>, StatusCode> {
    set_status(&db, ctid, "stopped").await
}

async fn start_scalet(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
    Json(_body): Json<Value>,
) -> Result<Json<Scalet>, StatusCode> {
    set_status(&db, ctid, "started").await
}

async fn rebuild_scalet(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
    Json(_input): Json<PasswordBody>,
) -> Result<Json<Scalet>, StatusCode> {
    set_status(&db, ctid, "started").await
}

async fn restore_scalet(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
    Json(input): Json<MakeFromBody>,
) -> Result<Json<Scalet>, StatusCode> {
    let mut store = db.write().await;
    if !store.backups.contains_key(&input.make_from) {
        return Err(StatusCode::NOT_FOUND);
    }
    let scalet = store.scalets.get_mut(&ctid).ok_or(StatusCode::NOT_FOUND)?;
    scalet.made_from = input.make_from;
    Ok(Json(scalet.clone()))
}

async fn upgrade_scalet(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
    Json(input): Json<RplanBody>,
) -> Result<Json<Scalet>, StatusCode> {
    let mut store = db.write().await;
    let scalet = store.scalets.get_mut(&ctid).ok_or(StatusCode::NOT_FOUND)?;
    scalet.rplan = input.rplan;
    Ok(Json(scalet.clone()))
}

// --- tags ---

async fn list_tags(State(db): State<Db>) -> Json<Vec<Tag>> {
    let store = db.read().await;
    Json(store.tags.values().cloned().collect())
}

async fn create_tag(
    State(db): State<Db>,
    Json(input): Json<TagBody>,
) -> (StatusCode, Json<Tag>) {
    let mut store = db.write().await;
    let id = store.next_id();
    let tag = Tag {
        id,
        name: input.name,
        scalets: input.scalets.unwrap_or_default(),
    };
    store.tags.insert(id, tag.clone());
    (StatusCode::CREATED, Json(tag))
}

async fn get_tag(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Tag>, StatusCode> {
    let store = db.read().await;
    store
        .tags
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_tag(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TagBody>,
) -> Result<Json<Tag>, StatusCode> {
    let mut store = db.write().await;
    let tag = store.tags.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    tag.name = input.name;
    if let Some(scalets) = input.scalets {
        tag.scalets = scalets;
    }
    Ok(Json(tag.clone()))
}

async fn delete_tag(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .tags
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- backups ---

async fn create_backup(
    State(db): State<Db>,
    Path(ctid): Path<u64>,
    Json(input): Json<NameBody>,
) -> Result<(StatusCode, Json<Backup>), StatusCode> {
    let mut store = db.write().await;
    if !store.scalets.contains_key(&ctid) {
        return Err(StatusCode::NOT_FOUND);
    }
    let id = format!("bkp-{}", store.next_id());
    let location = store.scalets[&ctid].location.clone();
    let backup = Backup {
        id: id.clone(),
        name: input.name,
        scalet: ctid,
        location,
        status: "finished".to_string(),
    };
    store.backups.insert(id, backup.clone());
    Ok((StatusCode::CREATED, Json(backup)))
}

async fn list_backups(State(db): State<Db>) -> Json<Vec<Backup>> {
    let store = db.read().await;
    Json(store.backups.values().cloned().collect())
}

async fn get_backup(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Backup>, StatusCode> {
    let store = db.read().await;
    store
        .backups
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_backup(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .backups
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn relocate_backup(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<DestinationBody>,
) -> Result<Json<Backup>, StatusCode> {
    let mut store = db.write().await;
    let backup = store.backups.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    backup.location = input.destination;
    Ok(Json(backup.clone()))
}

// --- catalog fixtures ---

async fn locations() -> Json<Value> {
    Json(json!([
        {"id": "spb0", "description": "Saint-Petersburg", "active": true},
        {"id": "msk0", "description": "Moscow", "active": true},
    ]))
}

async fn images() -> Json<Value> {
    Json(json!([
        {"id": "ubuntu_14.04_64_002_master", "description": "Ubuntu 14.04 64bit"},
        {"id": "debian_8.1_64_001_master", "description": "Debian 8.1 64bit"},
    ]))
}

async fn rplans() -> Json<Value> {
    Json(json!([
        {"id": "small", "cpus": 1, "memory": 512, "disk": 20},
        {"id": "medium", "cpus": 2, "memory": 2048, "disk": 40},
        {"id": "large", "cpus": 4, "memory": 8192, "disk": 80},
    ]))
}

// --- billing ---

async fn prices() -> Json<Value> {
    Json(json!({
        "default": {"small": 200, "medium": 700, "large": 2800},
        "period": "month",
    }))
}

async fn get_notify(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(json!({ "notify_balance": store.notify_balance }))
}

async fn set_notify(State(db): State<Db>, Json(input): Json<NotifyBody>) -> Json<Value> {
    let mut store = db.write().await;
    store.notify_balance = input.notify_balance;
    Json(json!({ "notify_balance": store.notify_balance }))
}

async fn balance() -> Json<Value> {
    Json(json!({ "balance": 150000, "bonus": 0, "unpaid": 0 }))
}

async fn payments() -> Json<Value> {
    Json(json!([
        {"id": 1, "amount": 50000, "date": "2020-01-15"},
        {"id": 2, "amount": 100000, "date": "2020-02-15"},
    ]))
}

async fn consumption(Query(range): Query<ConsumptionRange>) -> Json<Value> {
    Json(json!({
        "start": range.start,
        "end": range.end,
        "summ": 1234,
    }))
}

// --- ssh keys ---

async fn list_ssh_keys(State(db): State<Db>) -> Json<Vec<SshKey>> {
    let store = db.read().await;
    Json(store.ssh_keys.values().cloned().collect())
}

async fn create_ssh_key(
    State(db): State<Db>,
    Json(input): Json<SshKeyCreate>,
) -> (StatusCode, Json<SshKey>) {
    let mut store = db.write().await;
    let id = store.next_id();
    let key = SshKey {
        id,
        name: input.name,
        key: input.key,
    };
    store.ssh_keys.insert(id, key.clone());
    (StatusCode::CREATED, Json(key))
}

async fn delete_ssh_key(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .ssh_keys
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- domains and records ---

async fn list_domains(State(db): State<Db>) -> Json<Vec<Domain>> {
    let store = db.read().await;
    Json(store.domains.values().cloned().collect())
}

async fn create_domain(
    State(db): State<Db>,
    Json(input): Json<DomainCreate>,
) -> (StatusCode, Json<Domain>) {
    let mut store = db.write().await;
    let id = store.next_id();
    let domain = Domain {
        id,
        name: input.name,
        tags: Vec::new(),
    };
    store.domains.insert(id, domain.clone());
    store.records.insert(id, HashMap::new());
    (StatusCode::CREATED, Json(domain))
}

async fn get_domain(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Domain>, StatusCode> {
    let store = db.read().await;
    store
        .domains
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_domain(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<DomainTags>,
) -> Result<Json<Domain>, StatusCode> {
    let mut store = db.write().await;
    let domain = store.domains.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    domain.tags = input.tags;
    Ok(Json(domain.clone()))
}

async fn delete_domain(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.records.remove(&id);
    store
        .domains
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_records(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    let store = db.read().await;
    let records = store.records.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(records.values().cloned().collect()))
}

async fn create_record(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let Value::Object(mut record) = body else {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    };
    let mut store = db.write().await;
    if !store.domains.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let rid = store.next_id();
    record.insert("id".to_string(), json!(rid));
    let record = Value::Object(record);
    store
        .records
        .entry(id)
        .or_default()
        .insert(rid, record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_record(
    State(db): State<Db>,
    Path((id, rid)): Path<(u64, u64)>,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    store
        .records
        .get(&id)
        .and_then(|records| records.get(&rid))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_record(
    State(db): State<Db>,
    Path((id, rid)): Path<(u64, u64)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let Value::Object(mut record) = body else {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    };
    let mut store = db.write().await;
    let records = store.records.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if !records.contains_key(&rid) {
        return Err(StatusCode::NOT_FOUND);
    }
    record.insert("id".to_string(), json!(rid));
    let record = Value::Object(record);
    records.insert(rid, record.clone());
    Ok(Json(record))
}

async fn delete_record(
    State(db): State<Db>,
    Path((id, rid)): Path<(u64, u64)>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let records = store.records.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    records
        .remove(&rid)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
