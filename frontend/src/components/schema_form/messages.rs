use common::form::FormatChoice;
use common::model::options::OptionKey;

#[derive(Clone)]
pub enum Msg {
    SetStem(String),
    SetExtension(String),
    SetFormat(FormatChoice),
    SetDelimiter(String),
    SetHeader(bool),
    SetScanRows(bool),
    SetMaxScanRows(String),
    /// Row position in the table, new name.
    SetColumnName(usize, String),
    SetColumnType(usize, String),
    SetColumnWidth(usize, String),
    AddRows(usize),
    SetOption(OptionKey, String),
    ToggleOptions,
    Download,
    DownloadFinished(Result<(), String>),
}
