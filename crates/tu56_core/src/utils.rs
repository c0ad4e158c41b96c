use byteorder::{LittleEndian as LE, WriteBytesExt};
use std::io::{self, Write};

pub fn write_u16<W: Write>(w: &mut W, v: u16) -> io::Result<()> { w.write_u16::<LE>(v) }

pub fn write_words<W: Write>(w: &mut W, words: &[u16]) -> io::Result<()> {
    for &v in words { write_u16(w, v)?; }
    Ok(())
}
