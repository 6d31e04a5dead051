use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write, Lines};
use std::iter::Iterator;
use log::warn;
use crate::error::Error;
use crate::types::StreetRecord;

///
/// Line delimited stream of Overpass elements, one JSON object per line
///
/// Lines that cannot be parsed are yielded as errors so the caller can skip
/// them without losing the rest of the stream. A failed read is yielded once
/// and ends the stream
///
pub struct StreetStream {
    input: Lines<Box<dyn BufRead>>,
    line: usize,
    done: bool,
    errors: Option<BufWriter<File>>
}

impl StreetStream {
    ///
    /// Read from the given file path or stdin if None
    ///
    pub fn new(input: Option<String>) -> Result<Self, Error> {
        let reader: Box<dyn BufRead> = match input {
            Some(inpath) => Box::new(BufReader::new(File::open(inpath)?)),
            None => Box::new(io::stdin().lock())
        };

        Ok(StreetStream::from_reader(reader))
    }

    pub fn from_reader(reader: Box<dyn BufRead>) -> Self {
        StreetStream {
            input: reader.lines(),
            line: 0,
            done: false,
            errors: None
        }
    }

    ///
    /// Append every rejected line to the given file
    ///
    pub fn errors(mut self, path: &str) -> Result<Self, Error> {
        self.errors = Some(BufWriter::new(File::create(path)?));

        Ok(self)
    }

    fn reject(&mut self, err: Error) -> Error {
        if let Some(ref mut file) = self.errors {
            if let Err(write_err) = writeln!(file, "line {}: {}", self.line, err) {
                warn!("unable to write to error log: {}", write_err);
            }
        }

        err
    }
}

impl Iterator for StreetStream {
    type Item = Result<StreetRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let mut line = match self.input.next() {
                None => {
                    self.done = true;
                    return None;
                },
                Some(Err(err)) => {
                    // read errors such as EISDIR repeat on every call
                    self.line += 1;
                    self.done = true;
                    return Some(Err(self.reject(Error::Io(err))));
                },
                Some(Ok(line)) => line
            };

            self.line += 1;

            if line.trim().is_empty() {
                continue;
            }

            //Remove Ascii Record Separators at beginning or end of line
            if line.ends_with('\u{001E}') {
                line.pop();
            } else if line.starts_with('\u{001E}') {
                line.replace_range(0..1, "");
            }

            let record = match serde_json::from_str::<serde_json::Value>(&line) {
                Ok(element) => StreetRecord::from_element(&element),
                Err(err) => Err(Error::Json(err))
            };

            return match record {
                Ok(record) => Some(Ok(record)),
                Err(err) => Some(Err(self.reject(err)))
            };
        }
    }
}

impl Drop for StreetStream {
    fn drop(&mut self) {
        if let Some(ref mut file) = self.errors {
            if let Err(err) = file.flush() {
                warn!("unable to flush error log: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::types::Kind;

    fn stream(input: &'static str) -> StreetStream {
        StreetStream::from_reader(Box::new(Cursor::new(input)))
    }

    #[test]
    fn test_stream() {
        let records: Vec<Result<StreetRecord, Error>> = stream(concat!(
            "{\"type\":\"way\",\"id\":1,\"tags\":{\"name\":\"Zoe Street\"}}\n",
            "\n",
            "   \n",
            "\u{001E}{\"type\":\"relation\",\"id\":2,\"tags\":{\"name\":\"zoe   street\"}}\n",
            "{\"type\":\"way\",\"id\":3}\u{001E}\n"
        )).collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].as_ref().unwrap(), &StreetRecord::new(1, Kind::Way, Some(String::from("Zoe Street"))));
        assert_eq!(records[1].as_ref().unwrap(), &StreetRecord::new(2, Kind::Relation, Some(String::from("zoe   street"))));
        assert_eq!(records[2].as_ref().unwrap(), &StreetRecord::new(3, Kind::Way, None));
    }

    #[test]
    fn test_stream_invalid_lines() {
        let records: Vec<Result<StreetRecord, Error>> = stream(concat!(
            "not json\n",
            "{\"type\":\"node\",\"id\":1}\n",
            "{\"type\":\"way\",\"id\":4,\"tags\":{\"name\":\"Main Street\"}}\n"
        )).collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_err());
        assert!(records[1].is_err());
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_stream_error_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors.log");

        {
            let records: Vec<Result<StreetRecord, Error>> = stream("{\"type\":\"way\",\"id\":1}\n[broken\n")
                .errors(path.to_str().unwrap())
                .unwrap()
                .collect();

            assert_eq!(records.len(), 2);
        }

        let log = std::fs::read_to_string(&path).unwrap();
        assert!(log.starts_with("line 2: JSON error"));
        assert_eq!(log.lines().count(), 1);
    }

    #[test]
    fn test_stream_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("errors.log");

        {
            let mut stream = StreetStream::new(Some(dir.path().to_str().unwrap().to_string()))
                .unwrap()
                .errors(log.to_str().unwrap())
                .unwrap();

            match stream.next() {
                Some(Err(Error::Io(_))) => (),
                other => panic!("expected an io error, got {:?}", other)
            }

            assert!(stream.next().is_none());
            assert!(stream.next().is_none());
        }

        assert_eq!(std::fs::read_to_string(&log).unwrap().lines().count(), 1);
    }
}
