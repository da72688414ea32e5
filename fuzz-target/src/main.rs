#[macro_use]
extern crate afl;
extern crate gprmc;

use gprmc::{
    parse_line_lossy, parse_sentence, read_sentence, FilterConfig, LineBuffer, ReadError,
    SliceSource,
};

fn filter_and_parse(bufsize: usize, data: &[u8]) {
    let mut buf = vec![0; bufsize];
    let mut line = LineBuffer::new(&mut buf[..]).unwrap();
    let mut source = SliceSource::new(data);
    let config = FilterConfig::unbounded().stop_at_end_of_stream(true);

    loop {
        match read_sentence(&mut source, &mut line, &config) {
            Ok(_) => {
                assert!(line.len() < bufsize);
                assert_eq!(line.as_bytes_with_nul().last(), Some(&0));

                let lossy = parse_line_lossy(line.as_bytes());
                let bytes = line.as_bytes();
                if let (Ok(strict), Some(b".000,")) = (parse_sentence(bytes), bytes.get(13..18)) {
                    assert_eq!(strict, lossy);
                }
                if source.remaining().is_empty() {
                    break;
                }
            },
            // A NUL inside the input ends the line, not the data
            Err(ReadError::EndOfStream) if !source.remaining().is_empty() => {},
            Err(ReadError::EndOfStream) => break,
            Err(e) => panic!("unexpected {:?}", e),
        }
    }

    // Every byte of the input must have been consumed
    assert!(source.remaining().is_empty());
}

fn main() {
    fuzz!(|data: &[u8]| {
        if data.len() > 1 {
            let bufsize = data[0] as usize;
            if bufsize >= 1 {
                filter_and_parse(bufsize, &data[1..]);
            }
        }
    });
}
