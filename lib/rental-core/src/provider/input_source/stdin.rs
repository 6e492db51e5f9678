use super::InputSource;

/// Reads report parameters from the process stdin, one line per call.
#[derive(Default)]
pub struct StdinInputSource;

impl InputSource for StdinInputSource {
    fn read_line(&self) -> Result<String, std::io::Error> {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }

        Ok(line)
    }
}
