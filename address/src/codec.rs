use crate::addr::Address;
use bytes::{Buf, BufMut, BytesMut};
use std::io;
use tokio_util::codec::{Decoder, Encoder};

/// Whitespace-delimited textual codec for [`Address`] values.
///
/// Decoding skips leading ASCII whitespace, consumes one token, and parses
/// it with the same degradation rules as [`Address::resolve`], except that
/// unknown tokens degrade straight to [`Address::NONE`] instead of going
/// to the system resolver (a decoder must not block on DNS inside a
/// reactor). Encoding emits the dotted-decimal form followed by a newline
/// so consecutive values stay delimited.
#[derive(Debug, Default)]
pub struct AddressCodec;

/// Token parse shared by `decode` and `decode_eof`.
fn parse_token(token: &str) -> Address {
    if token == "localhost" {
        return Address::LOCALHOST;
    }
    token.parse().unwrap_or(Address::NONE)
}

fn token_to_address(token: &[u8]) -> Result<Address, io::Error> {
    let text = std::str::from_utf8(token)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(parse_token(text))
}

impl Decoder for AddressCodec {
    type Item = Address;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Address>, io::Error> {
        let start = match src.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(start) => start,
            None => {
                // Nothing but whitespace so far; drop it and wait for more.
                src.clear();
                return Ok(None);
            }
        };
        let Some(len) = src[start..].iter().position(|b| b.is_ascii_whitespace()) else {
            // Token not delimited yet.
            return Ok(None);
        };
        src.advance(start);
        let token = src.split_to(len);
        Ok(Some(token_to_address(&token)?))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Address>, io::Error> {
        if let Some(addr) = self.decode(src)? {
            return Ok(Some(addr));
        }
        // A trailing token with no delimiter is complete once the stream
        // ends.
        let start = match src.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(start) => start,
            None => {
                src.clear();
                return Ok(None);
            }
        };
        src.advance(start);
        let token = src.split_to(src.len());
        Ok(Some(token_to_address(&token)?))
    }
}

impl Encoder<Address> for AddressCodec {
    type Error = io::Error;

    fn encode(&mut self, item: Address, dst: &mut BytesMut) -> Result<(), io::Error> {
        let text = item.to_string();
        dst.reserve(text.len() + 1);
        dst.put_slice(text.as_bytes());
        dst.put_u8(b'\n');
        Ok(())
    }
}
