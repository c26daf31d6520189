use tabled::Table;

use super::local_services;
use crate::{
    config::MailConfig, error, info, pipeline::Transformer, success, types::OutputTableRow, utils,
};

pub async fn transform() {
    let mail = match MailConfig::from_env() {
        Ok(m) => m,
        Err(e) => error!("{}", e),
    };
    let (storage, store, notifier) = local_services();
    info!("Reading raw data below {}", storage.root.display());

    let transformer = Transformer::new(store, notifier, mail).with_bucket(storage.bucket);
    let report = match transformer.run().await {
        Ok(report) => report,
        Err(e) => error!("Transformation failed: {}", e),
    };

    if report.documents.is_empty() {
        info!("No raw documents were waiting");
    } else {
        let mut rows: Vec<OutputTableRow> = report
            .documents
            .iter()
            .flat_map(|doc| {
                doc.outputs.iter().map(|out| OutputTableRow {
                    source: utils::base_name(&doc.source_key).to_string(),
                    entity: out.entity.to_string(),
                    rows: out.rows,
                    key: out.key.clone(),
                })
            })
            .collect();
        utils::sort_output_rows(&mut rows);
        println!("{}", Table::new(rows));
    }

    success!("[{}] {}", report.status.status_code, report.status.body);
}
