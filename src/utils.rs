use egui_extras::{Column, TableBuilder};
use polars::prelude::*;

pub fn display_dataframe(df: &DataFrame, ui: &mut egui::Ui) {
    let nr_cols = df.width();
    let nr_rows = df.height();
    let cols = &df.get_column_names();

    TableBuilder::new(ui)
        .column(Column::auto())
        .columns(Column::auto().clip(true), nr_cols)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(200.0)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.label("Row");
            });
            for head in cols {
                header.col(|ui| {
                    ui.heading(*head);
                });
            }
        })
        .body(|body| {
            body.rows(10.0, nr_rows, |mut row| {
                let row_index = row.index();
                row.col(|ui| {
                    ui.label(format!("{}", row_index));
                });
                for col in cols {
                    row.col(|ui| {
                        if let Ok(column) = &df.column(col) {
                            if let Ok(value) = column.get(row_index) {
                                ui.label(format!("{}", value).replace('"', ""));
                            }
                        }
                    });
                }
            });
        });
}
