use crate::commands::{CmdMessage, CmdResult, SunpanelPaths};
use crate::error::{Result, SunpanelError};

pub fn run(paths: &SunpanelPaths) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let existed = dir.exists();
    std::fs::create_dir_all(dir).map_err(SunpanelError::Io)?;

    let mut result = CmdResult::default();
    if existed {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            dir.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Initialized sunpanel data in {}",
            dir.display()
        )));
    }
    Ok(result)
}
