//! [`SqliteStore`] — the SQLite implementation of [`LedgerStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use folio_core::{
  asset::{Asset, AssetWithClient, NewAsset},
  client::{Client, ClientPatch, NewClient},
  store::LedgerStore,
};

use crate::{
  Error, Result,
  encode::{RawAssetWithClient, RawClient, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A folio ledger backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// Result of the gated asset insert. The client check and the insert run
/// in the same connection call, so the pair cannot interleave with
/// another write.
enum AssetInsert {
  ClientMissing,
  ClientInactive,
  Inserted(i64),
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── LedgerStore impl ────────────────────────────────────────────────────────

impl LedgerStore for SqliteStore {
  type Error = Error;

  // ── Clients ───────────────────────────────────────────────────────────────

  async fn add_client(&self, input: NewClient) -> Result<Client> {
    let created_at = Utc::now();

    let name    = input.name.clone();
    let email   = input.email.clone();
    let active  = input.active;
    let at_str  = encode_dt(created_at);

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO clients (name, email, active, created_at) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name, email, active, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Client {
      id,
      name: input.name,
      email: input.email,
      active: input.active,
      created_at,
    })
  }

  async fn get_client(&self, id: i64) -> Result<Option<Client>> {
    let raw: Option<RawClient> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, name, email, active, created_at FROM clients WHERE id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(RawClient {
                id:         row.get(0)?,
                name:       row.get(1)?,
                email:      row.get(2)?,
                active:     row.get(3)?,
                created_at: row.get(4)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawClient::into_client).transpose()
  }

  async fn list_clients(&self) -> Result<Vec<Client>> {
    let raws: Vec<RawClient> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT id, name, email, active, created_at FROM clients ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawClient {
              id:         row.get(0)?,
              name:       row.get(1)?,
              email:      row.get(2)?,
              active:     row.get(3)?,
              created_at: row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawClient::into_client).collect()
  }

  async fn update_client(&self, id: i64, patch: ClientPatch) -> Result<Client> {
    // An empty patch is a valid no-op; return the stored record.
    if patch.is_empty() {
      return self
        .get_client(id)
        .await?
        .ok_or_else(|| folio_core::Error::ClientNotFound(id).into());
    }

    let raw: Option<RawClient> = self
      .conn
      .call(move |conn| {
        use rusqlite::types::Value;

        // SET clause built from the fields present in the patch; the
        // placeholders bind positionally, id last.
        let mut sets: Vec<&'static str> = vec![];
        let mut values: Vec<Value> = vec![];

        if let Some(name) = patch.name {
          sets.push("name = ?");
          values.push(Value::Text(name));
        }
        if let Some(email) = patch.email {
          sets.push("email = ?");
          values.push(Value::Text(email));
        }
        if let Some(active) = patch.active {
          sets.push("active = ?");
          values.push(Value::Integer(active as i64));
        }
        values.push(Value::Integer(id));

        let sql = format!("UPDATE clients SET {} WHERE id = ?", sets.join(", "));
        let affected = conn.execute(&sql, rusqlite::params_from_iter(values))?;

        if affected == 0 {
          return Ok(None);
        }

        Ok(
          conn
            .query_row(
              "SELECT id, name, email, active, created_at FROM clients WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(RawClient {
                  id:         row.get(0)?,
                  name:       row.get(1)?,
                  email:      row.get(2)?,
                  active:     row.get(3)?,
                  created_at: row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw
      .ok_or_else(|| Error::from(folio_core::Error::ClientNotFound(id)))
      .and_then(RawClient::into_client)
  }

  async fn delete_client(&self, id: i64) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM clients WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if affected == 0 {
      return Err(folio_core::Error::ClientNotFound(id).into());
    }
    Ok(())
  }

  // ── Assets ────────────────────────────────────────────────────────────────

  async fn add_asset(&self, input: NewAsset) -> Result<Asset> {
    let name      = input.name.clone();
    let value     = input.value;
    let client_id = input.client_id;

    let outcome = self
      .conn
      .call(move |conn| {
        let client: Option<bool> = conn
          .query_row(
            "SELECT active FROM clients WHERE id = ?1",
            rusqlite::params![client_id],
            |row| row.get(0),
          )
          .optional()?;

        let active = match client {
          None => return Ok(AssetInsert::ClientMissing),
          Some(active) => active,
        };
        if !active {
          return Ok(AssetInsert::ClientInactive);
        }

        conn.execute(
          "INSERT INTO assets (name, value, client_id) VALUES (?1, ?2, ?3)",
          rusqlite::params![name, value, client_id],
        )?;
        Ok(AssetInsert::Inserted(conn.last_insert_rowid()))
      })
      .await?;

    match outcome {
      AssetInsert::ClientMissing => {
        Err(folio_core::Error::ClientNotFound(client_id).into())
      }
      AssetInsert::ClientInactive => {
        Err(folio_core::Error::ClientInactive(client_id).into())
      }
      AssetInsert::Inserted(id) => Ok(Asset {
        id,
        name: input.name,
        value: input.value,
        client_id: input.client_id,
      }),
    }
  }

  async fn get_asset(&self, id: i64) -> Result<Option<Asset>> {
    let asset: Option<Asset> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, name, value, client_id FROM assets WHERE id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(Asset {
                id:        row.get(0)?,
                name:      row.get(1)?,
                value:     row.get(2)?,
                client_id: row.get(3)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    Ok(asset)
  }

  async fn list_assets(&self) -> Result<Vec<AssetWithClient>> {
    let raws: Vec<RawAssetWithClient> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT
             a.id, a.name, a.value, a.client_id,
             c.id, c.name, c.email, c.active, c.created_at
           FROM assets a
           JOIN clients c ON c.id = a.client_id
           ORDER BY a.id",
        )?;

        let rows = stmt
          .query_map([], |row| {
            Ok(RawAssetWithClient {
              id:        row.get(0)?,
              name:      row.get(1)?,
              value:     row.get(2)?,
              client_id: row.get(3)?,
              client:    RawClient {
                id:         row.get(4)?,
                name:       row.get(5)?,
                email:      row.get(6)?,
                active:     row.get(7)?,
                created_at: row.get(8)?,
              },
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawAssetWithClient::into_asset_with_client)
      .collect()
  }

  async fn list_assets_for_client(&self, client_id: i64) -> Result<Vec<Asset>> {
    let assets: Vec<Asset> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, value, client_id FROM assets WHERE client_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![client_id], |row| {
            Ok(Asset {
              id:        row.get(0)?,
              name:      row.get(1)?,
              value:     row.get(2)?,
              client_id: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(assets)
  }

  async fn delete_asset(&self, id: i64) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM assets WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if affected == 0 {
      return Err(folio_core::Error::AssetNotFound(id).into());
    }
    Ok(())
  }
}
