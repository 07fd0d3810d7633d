use super::DbError;
use common::model::penguin::{Penguin, PenguinFields, PenguinPatch};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS penguins (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    species TEXT NOT NULL,
    habitat TEXT NOT NULL,
    height TEXT NOT NULL,
    diet TEXT NOT NULL,
    fun_fact TEXT NOT NULL,
    image_url TEXT,
    is_favorite INTEGER NOT NULL DEFAULT 0
)";

const SELECT_COLUMNS: &str =
    "SELECT id, species, habitat, height, diet, fun_fact, image_url, is_favorite FROM penguins";

/// Handle to the catalog database file. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PenguinRepository {
    path: PathBuf,
}

fn penguin_from_row(row: &Row<'_>) -> rusqlite::Result<Penguin> {
    Ok(Penguin {
        id: row.get(0)?,
        species: row.get(1)?,
        habitat: row.get(2)?,
        height: row.get(3)?,
        diet: row.get(4)?,
        fun_fact: row.get(5)?,
        image_url: row.get(6)?,
        is_favorite: row.get(7)?,
    })
}

impl PenguinRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, DbError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Creates the `penguins` table if it does not exist yet.
    pub fn init_schema(&self) -> Result<(), DbError> {
        self.connect()?.execute(CREATE_TABLE, [])?;
        Ok(())
    }

    /// Every record, oldest first. An empty table yields an empty vector.
    pub fn list(&self) -> Result<Vec<Penguin>, DbError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY seq", SELECT_COLUMNS))?;
        let penguins = stmt
            .query_map([], penguin_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(penguins)
    }

    fn find(conn: &Connection, id: &str) -> Result<Option<Penguin>, DbError> {
        Ok(conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                penguin_from_row,
            )
            .optional()?)
    }

    /// Inserts a new record under a fresh UUID.
    pub fn create(&self, fields: PenguinFields) -> Result<Penguin, DbError> {
        let missing = fields.missing_required();
        if !missing.is_empty() {
            return Err(DbError::Invalid(missing));
        }

        let penguin = fields.with_id(Uuid::new_v4().to_string());
        self.connect()?.execute(
            "INSERT INTO penguins (id, species, habitat, height, diet, fun_fact, image_url, is_favorite)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &penguin.id,
                &penguin.species,
                &penguin.habitat,
                &penguin.height,
                &penguin.diet,
                &penguin.fun_fact,
                &penguin.image_url,
                penguin.is_favorite,
            ],
        )?;
        Ok(penguin)
    }

    /// Applies `patch` to the record `id` and returns the stored result.
    ///
    /// The read and the write share one immediate transaction, so concurrent
    /// partial updates of the same record serialize instead of overwriting each other.
    pub fn update(&self, id: &str, patch: &PenguinPatch) -> Result<Penguin, DbError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut penguin = Self::find(&tx, id)?.ok_or_else(|| DbError::NotFound(id.to_string()))?;

        patch.apply_to(&mut penguin);
        let missing = penguin.fields().missing_required();
        if !missing.is_empty() {
            return Err(DbError::Invalid(missing));
        }

        tx.execute(
            "UPDATE penguins
             SET species = ?1, habitat = ?2, height = ?3, diet = ?4, fun_fact = ?5,
                 image_url = ?6, is_favorite = ?7
             WHERE id = ?8",
            params![
                &penguin.species,
                &penguin.habitat,
                &penguin.height,
                &penguin.diet,
                &penguin.fun_fact,
                &penguin.image_url,
                penguin.is_favorite,
                &penguin.id,
            ],
        )?;
        tx.commit()?;
        Ok(penguin)
    }
}
