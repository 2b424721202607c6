//! Update function for the schema.ini form.
//!
//! Elm-style: every `Msg` mutates the `SchemaForm` held by the component and
//! returns whether the view should re-render. The only asynchronous work is
//! the download, which posts the current descriptor to the backend.

use gloo_console::{error, log};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{save_text_as_file, show_toast};
use super::messages::Msg;
use super::state::SchemaFormComponent;

const DOWNLOAD_URL: &str = "/api/schema/download";
const DOWNLOAD_FILE_NAME: &str = "schema.ini";

pub fn update(component: &mut SchemaFormComponent, ctx: &Context<SchemaFormComponent>, msg: Msg) -> bool {
    let form = &mut component.form;
    match msg {
        Msg::SetStem(stem) => form.stem = stem,
        Msg::SetExtension(extension) => form.extension = extension,
        Msg::SetFormat(choice) => form.format = choice,
        Msg::SetDelimiter(value) => {
            // max one character, as the input's maxlength
            form.delimiter_input = value.chars().take(1).collect();
        }
        Msg::SetHeader(has_header) => form.has_header = has_header,
        Msg::SetScanRows(enabled) => form.scan_rows = enabled,
        Msg::SetMaxScanRows(value) => {
            // Non-numeric input keeps the previous value; an empty field means 0.
            if let Ok(rows) = value.trim().parse::<u32>() {
                form.max_scan_rows = rows;
            } else if value.trim().is_empty() {
                form.max_scan_rows = 0;
            }
        }
        Msg::SetColumnName(position, name) => form.columns.set_name(position, &name),
        Msg::SetColumnType(position, value) => form.columns.set_type(position, &value),
        Msg::SetColumnWidth(position, value) => form.columns.set_width(position, &value),
        Msg::AddRows(count) => form.columns.append_many(count),
        Msg::SetOption(key, value) => form.options.set(key, &value),
        Msg::ToggleOptions => component.options_open = !component.options_open,
        Msg::Download => {
            if component.downloading {
                return false;
            }
            component.downloading = true;
            let descriptor = component.form.to_descriptor();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match Request::post(DOWNLOAD_URL).json(&descriptor) {
                    Ok(request) => match request.send().await {
                        Ok(resp) if resp.ok() => match resp.text().await {
                            Ok(text) => save_text_as_file(&text, DOWNLOAD_FILE_NAME),
                            Err(e) => Err(e.to_string()),
                        },
                        Ok(resp) => Err(resp
                            .text()
                            .await
                            .unwrap_or_else(|_| format!("HTTP {}", resp.status()))),
                        Err(e) => Err(e.to_string()),
                    },
                    Err(e) => Err(e.to_string()),
                };
                link.send_message(Msg::DownloadFinished(result));
            });
        }
        Msg::DownloadFinished(result) => {
            component.downloading = false;
            match result {
                Ok(()) => log!("schema.ini downloaded"),
                Err(e) => {
                    error!(format!("schema.ini download failed: {}", e));
                    show_toast("ダウンロードに失敗しました");
                }
            }
        }
    }
    true
}
