// src/db/storage.rs

use std::fs;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::common::error::AppError;

// Os três slots nomeados do armazenamento. Mesmos nomes de chave que o
// front original usava no localStorage, então um export antigo é legível.
pub const TICKETS_KEY: &str = "repair_tickets";
pub const PARTS_KEY: &str = "repair_parts";
pub const TRANSACTIONS_KEY: &str = "repair_transactions";

// Adaptador de persistência: um arquivo JSON por slot, dentro de um
// diretório de dados local. Sem versionamento de schema e sem migração;
// cada Save sobrescreve a coleção inteira.
#[derive(Clone)]
pub struct StorageAdapter {
    data_dir: PathBuf,
}

impl StorageAdapter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.slot_path(key).exists()
    }

    // Slot ausente = coleção vazia. Bytes corrompidos viram erro que o
    // chamador trata degradando para vazio (ver Store::load_or_empty).
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&path)?;
        let collection = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::StorageParse(key.to_string(), e))?;
        Ok(collection)
    }

    // Sobrescreve o slot inteiro, incondicionalmente.
    pub fn save<T: Serialize>(&self, key: &str, collection: &[T]) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(collection)?;
        fs::write(self.slot_path(key), bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inventory::Part;
    use rust_decimal::Decimal;

    fn adapter() -> (tempfile::TempDir, StorageAdapter) {
        let dir = tempfile::tempdir().unwrap();
        let adapter = StorageAdapter::new(dir.path()).unwrap();
        (dir, adapter)
    }

    #[test]
    fn slot_ausente_vira_colecao_vazia() {
        let (_dir, adapter) = adapter();
        let parts: Vec<Part> = adapter.load(PARTS_KEY).unwrap();
        assert!(parts.is_empty());
        assert!(!adapter.exists(PARTS_KEY));
    }

    #[test]
    fn save_e_load_preservam_conteudo_e_ordem() {
        let (_dir, adapter) = adapter();
        let parts = vec![
            Part {
                id: "2".to_string(),
                name: "Bateria Samsung S21".to_string(),
                quantity: 10,
                price: Decimal::new(100, 0),
            },
            Part {
                id: "1".to_string(),
                name: "Tela iPhone 13 Pro".to_string(),
                quantity: 5,
                price: Decimal::new(300, 0),
            },
        ];

        adapter.save(PARTS_KEY, &parts).unwrap();
        let loaded: Vec<Part> = adapter.load(PARTS_KEY).unwrap();
        assert_eq!(loaded, parts);
    }

    #[test]
    fn bytes_corrompidos_viram_erro_de_parse() {
        let (dir, adapter) = adapter();
        std::fs::write(dir.path().join(format!("{TICKETS_KEY}.json")), b"{nao e json").unwrap();

        let result: Result<Vec<Part>, _> = adapter.load(TICKETS_KEY);
        assert!(matches!(result, Err(AppError::StorageParse(_, _))));
    }
}
