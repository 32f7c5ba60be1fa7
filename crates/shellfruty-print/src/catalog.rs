//! Loading sales and the branch catalog from JSON.
//!
//! Both accept either the bare payload or the sales API envelope:
//!
//! ```json
//! { "success": true, "data": { "id_venta": 12, "detalles": [] } }
//! ```

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use shellfruty_core::branch::Branch;
use shellfruty_core::{BranchDirectory, SaleRecord};
use tracing::debug;

use crate::error::{PrintError, PrintResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum ApiPayload<T> {
    Envelope {
        success: bool,
        data: Option<T>,
        #[serde(default)]
        message: Option<String>,
    },
    Bare(T),
}

fn unwrap_payload<T: DeserializeOwned>(json: &str) -> PrintResult<T> {
    match serde_json::from_str::<ApiPayload<T>>(json) {
        Ok(ApiPayload::Bare(value)) => Ok(value),
        Ok(ApiPayload::Envelope {
            success: true,
            data: Some(value),
            ..
        }) => Ok(value),
        Ok(ApiPayload::Envelope { message, .. }) => Err(PrintError::Api(
            message.unwrap_or_else(|| "response carried no data".to_string()),
        )),
        // Re-parse as the bare type for a precise error message.
        Err(_) => Ok(serde_json::from_str::<T>(json)?),
    }
}

/// Parses a `VentaDetalle` document.
pub fn parse_sale(json: &str) -> PrintResult<SaleRecord> {
    let sale: SaleRecord = unwrap_payload(json)?;
    debug!(sale_id = sale.sale_id, items = sale.line_items.len(), "sale parsed");
    Ok(sale)
}

/// Parses the branch catalog (`[{id_sucursal, nombre_sucursal}]`).
pub fn parse_branches(json: &str) -> PrintResult<BranchDirectory> {
    let branches: Vec<Branch> = unwrap_payload(json)?;
    Ok(branches.into_iter().collect())
}

pub fn load_sale(path: &Path) -> PrintResult<SaleRecord> {
    parse_sale(&fs::read_to_string(path)?)
}

pub fn load_branches(path: &Path) -> PrintResult<BranchDirectory> {
    let directory = parse_branches(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), branches = directory.len(), "branch catalog loaded");
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_sale() {
        let sale = parse_sale(r#"{"id_venta": 12, "total": 30, "detalles": []}"#).unwrap();
        assert_eq!(sale.sale_id, 12);
        assert_eq!(sale.total_amount.cents(), 3000);
    }

    #[test]
    fn test_enveloped_sale() {
        let sale = parse_sale(
            r#"{"success": true, "data": {"id_venta": 12, "monto_qr": "30.00", "total": 30}}"#,
        )
        .unwrap();
        assert_eq!(sale.sale_id, 12);
        assert_eq!(sale.digital_amount.cents(), 3000);
    }

    #[test]
    fn test_failed_envelope() {
        let err = parse_sale(r#"{"success": false, "data": null, "message": "Venta no encontrada"}"#)
            .unwrap_err();
        assert!(matches!(err, PrintError::Api(ref m) if m == "Venta no encontrada"));
    }

    #[test]
    fn test_malformed_sale_is_a_json_error() {
        let err = parse_sale(r#"{"fecha": "2025-03-16"}"#).unwrap_err();
        assert!(matches!(err, PrintError::Json(_)));
    }

    #[test]
    fn test_branch_catalog() {
        let directory = parse_branches(
            r#"{"success": true, "data": [
                {"id_sucursal": 1, "nombre_sucursal": "Centro"},
                {"id_sucursal": 2, "nombre_sucursal": "Mercado Campesino"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.name_for(2), "Mercado Campesino");

        let bare = parse_branches(r#"[{"id_sucursal": 5, "nombre_sucursal": "Norte"}]"#).unwrap();
        assert_eq!(bare.name_for(5), "Norte");
    }

    #[test]
    fn test_missing_file() {
        let err = load_sale(Path::new("/nonexistent/venta.json")).unwrap_err();
        assert!(matches!(err, PrintError::Io(_)));
    }
}
