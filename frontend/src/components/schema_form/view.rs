//! View rendering for the schema.ini form.
//!
//! Left pane: file name, format, header, column table and options. Right pane:
//! the rendered `schema.ini` and the download button.
//!
//! Notes
//! - User-facing labels are in Japanese.
//! - The preview comes from `common::render::render_report`, the same code
//!   the backend uses for the download, so both always agree.

use common::form::FormatChoice;
use common::model::column::ColumnType;
use common::model::options::OptionKey;
use common::render::render_report;
use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SchemaFormComponent;
use crate::workspace_grid::WorkspaceGrid;

const SCHEMA_INI_DOCS: &str = "https://learn.microsoft.com/ja-jp/sql/odbc/microsoft/schema-ini-file-text-file-driver?view=sql-server-ver17#understanding-schemaini-files";

pub fn view(component: &SchemaFormComponent, ctx: &Context<SchemaFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="schemaini-root">
            <h1>{"Schemaini"}</h1>
            <p>{"schema.ini ファイル作成補助アプリ"}</p>
            <WorkspaceGrid columns={vec![0.65_f32, 0.35]}>
                <section class="pane">
                    <p>{"📝 テキストファイルの情報を入力してください"}</p>
                    { build_filename(component, link) }
                    <div class="row">
                        { build_format(component, link) }
                        { build_header(component, link) }
                    </div>
                    { build_columns(component, link) }
                    { build_options(component, link) }
                </section>
                <section class="pane">
                    { build_output(component, link) }
                </section>
            </WorkspaceGrid>
            { build_footer() }
        </div>
    }
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn build_filename(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    let form = &component.form;
    html! {
        <div class="field">
            <label>{"✔ ファイル名"}</label>
            <div class="filename">
                <input
                    type="text"
                    class="stem"
                    value={form.stem.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetStem(input_value(e)))}
                />
                <span>{"."}</span>
                <input
                    type="text"
                    class="extension"
                    value={form.extension.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetExtension(input_value(e)))}
                />
            </div>
        </div>
    }
}

fn build_format(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    let form = &component.form;
    let radios = FormatChoice::ALL
        .into_iter()
        .map(|choice| {
            html! {
                <label class="radio">
                    <input
                        type="radio"
                        name="format"
                        checked={form.format == choice}
                        onchange={link.callback(move |_| Msg::SetFormat(choice))}
                    />
                    { choice.label() }
                </label>
            }
        })
        .collect::<Html>();

    let delimiter = if form.format == FormatChoice::Custom {
        let warning = form.delimiter().warning;
        html! {
            <div class="field">
                <label>{"区切り文字"}</label>
                <input
                    type="text"
                    maxlength="1"
                    value={form.delimiter_input.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetDelimiter(input_value(e)))}
                />
                {
                    match warning {
                        Some(message) => html! { <div class="error">{ message }</div> },
                        None => html! {},
                    }
                }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="field">
            <label>{"✔ フォーマット"}</label>
            { radios }
            { delimiter }
        </div>
    }
}

fn build_header(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    let has_header = component.form.has_header;
    html! {
        <div class="field">
            <label>{"✔ ヘッダ"}</label>
            <label class="radio">
                <input
                    type="radio"
                    name="header"
                    checked={has_header}
                    onchange={link.callback(|_| Msg::SetHeader(true))}
                />
                {"あり"}
            </label>
            <label class="radio">
                <input
                    type="radio"
                    name="header"
                    checked={!has_header}
                    onchange={link.callback(|_| Msg::SetHeader(false))}
                />
                {"なし"}
            </label>
        </div>
    }
}

fn build_columns(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    let form = &component.form;
    // Type detection reads the header, so the toggle only exists with one.
    let scan_toggle = if form.has_header {
        html! {
            <label class="toggle">
                <input
                    type="checkbox"
                    checked={form.scan_rows}
                    onchange={link.callback(|e: Event| {
                        Msg::SetScanRows(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                {"データから型を判定"}
            </label>
        }
    } else {
        html! {}
    };

    let body = if form.has_header && form.scan_rows {
        html! {
            <div class="field">
                <label title="0 で全行を読み取り">{"読み取る行数"}</label>
                <input
                    type="number"
                    min="0"
                    step="1"
                    value={form.max_scan_rows.to_string()}
                    oninput={link.callback(|e: InputEvent| Msg::SetMaxScanRows(input_value(e)))}
                />
                <small>{"0 で全行を読み取り"}</small>
            </div>
        }
    } else {
        build_column_table(component, link)
    };

    html! {
        <div class="field">
            <div class="row">
                <label>{"✔ カラムの設定"}</label>
                { scan_toggle }
            </div>
            { body }
        </div>
    }
}

fn build_column_table(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    let rows = component
        .form
        .columns
        .rows()
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let selected = row.col_type.map(|t| t.as_str()).unwrap_or("");
            let type_options = ColumnType::ALL
                .into_iter()
                .map(|t| html! { <option value={t.as_str()} selected={t.as_str() == selected}>{ t.as_str() }</option> })
                .collect::<Html>();
            html! {
                <tr>
                    <td class="coln">{ format!("Col{}", row.index) }</td>
                    <td>
                        <input
                            type="text"
                            value={row.name.clone()}
                            oninput={link.callback(move |e: InputEvent| Msg::SetColumnName(position, input_value(e)))}
                        />
                    </td>
                    <td>
                        <select
                            onchange={link.callback(move |e: Event| {
                                Msg::SetColumnType(position, e.target_unchecked_into::<HtmlSelectElement>().value())
                            })}
                        >
                            <option value="" selected={selected.is_empty()}></option>
                            { type_options }
                        </select>
                    </td>
                    <td>
                        <input
                            type="number"
                            min="1"
                            step="1"
                            value={row.width.map(|w| w.to_string()).unwrap_or_default()}
                            oninput={link.callback(move |e: InputEvent| Msg::SetColumnWidth(position, input_value(e)))}
                        />
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <table class="grid">
                <thead>
                    <tr>
                        <th>{"番号"}</th>
                        <th>{"名称"}</th>
                        <th>{"型"}</th>
                        <th title="固定長ファイルでは必須">{"長さ"}</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
            <div class="row">
                <button onclick={link.callback(|_| Msg::AddRows(1))}>{"+ 1"}</button>
                <button onclick={link.callback(|_| Msg::AddRows(10))}>{"+ 10"}</button>
            </div>
        </>
    }
}

fn build_options(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    let table = if component.options_open {
        let rows = OptionKey::ALL
            .into_iter()
            .map(|key| {
                html! {
                    <tr>
                        <td>{ key.as_str() }</td>
                        <td>
                            <input
                                type="text"
                                value={component.form.options.get(key).to_string()}
                                oninput={link.callback(move |e: InputEvent| Msg::SetOption(key, input_value(e)))}
                            />
                        </td>
                    </tr>
                }
            })
            .collect::<Html>();
        html! {
            <table class="grid">
                <thead><tr><th>{"項目"}</th><th>{"値"}</th></tr></thead>
                <tbody>{ rows }</tbody>
            </table>
        }
    } else {
        html! {}
    };

    html! {
        <div class="field">
            <label>{"✔ オプション"}</label>
            <button class="expander" onclick={link.callback(|_| Msg::ToggleOptions)}>
                { if component.options_open { "▼ 値を指定" } else { "▶ 値を指定" } }
            </button>
            { table }
        </div>
    }
}

fn build_output(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    let descriptor = component.form.to_descriptor();
    let (content, hint) = match render_report(&descriptor) {
        Ok(report) if report.dropped_columns.is_empty() => (report.content, None),
        Ok(report) => {
            let dropped = report
                .dropped_columns
                .iter()
                .map(|i| format!("Col{}", i))
                .collect::<Vec<_>>()
                .join(", ");
            (report.content, Some(format!("入力が不足している行は出力されません: {}", dropped)))
        }
        Err(e) => (String::new(), Some(e.to_string())),
    };

    html! {
        <>
            <p>{"✨ スキーマ情報 ( schema.ini )"}</p>
            <pre class="code">{ content }</pre>
            {
                match hint {
                    Some(text) => html! { <div class="hint">{ text }</div> },
                    None => html! {},
                }
            }
            <button
                class="download"
                disabled={component.downloading}
                onclick={link.callback(|_| Msg::Download)}
            >
                {"Download"}
            </button>
        </>
    }
}

fn build_footer() -> Html {
    html! {
        <ul class="notes">
            <li>{"ブラウザ更新でリセットできます"}</li>
            <li>
                {"schema.ini ファイルの詳細については "}
                <a href={SCHEMA_INI_DOCS} target="_blank">{"Microsoft Web サイト"}</a>
                {" をご確認ください"}
            </li>
            <li>{"schema.ini ファイルの扱いは、使用するアプリケーションの仕様に従います"}</li>
        </ul>
    }
}
