use super::Cache;
use crate::cards::card::Card;
use crate::cards::flop::Flop;
use crate::cards::isomorphism::Isomorphism;
use crate::cards::permutation::Permutation;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

const MAGIC: &[u8; 8] = b"ISOFLOP\n";
const TRAILER: u16 = 0xFFFF;

/* persistence methods
 *
 * header   8 bytes  "ISOFLOP\n"
 *          4 bytes  entry count (u32 BE)
 * records  7 bytes  each, ordered by flop
 *          3 bytes  flop, one card index per byte, received order
 *          3 bytes  canonical flop, same encoding
 *          1 byte   permutation, two bits per suit image
 * trailer  2 bytes  0xFFFF
 */
impl Cache {
    /// where a precomputed table lives, `ISOFLOP_TABLE` overriding the default
    pub fn path() -> PathBuf {
        std::env::var_os("ISOFLOP_TABLE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("flop.isomorphism.bin"))
    }
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let entries = self.entries();
        log::info!("{:<32}{:<32}", "saving flop cache", path.display());
        let ref mut file = BufWriter::new(File::create(path)?);
        file.write_all(MAGIC)?;
        file.write_u32::<BE>(u32::try_from(entries.len())?)?;
        for (flop, isomorphism) in entries.iter() {
            file.write_all(&Self::bytes(flop))?;
            file.write_all(&Self::bytes(&isomorphism.canonical()))?;
            file.write_u8(u8::from(isomorphism.permutation()))?;
        }
        file.write_u16::<BE>(TRAILER)?;
        file.flush()?;
        log::info!("{:<32}{:<32}", "saved flop cache", entries.len());
        Ok(())
    }
    /// every record is checked against a fresh canonicalization,
    /// so a stale or corrupt table is rejected instead of trusted
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::info!("{:<32}{:<32}", "loading flop cache", path.display());
        let ref mut file = BufReader::new(File::open(path)?);
        let ref mut magic = [0u8; 8];
        file.read_exact(magic)?;
        anyhow::ensure!(magic == MAGIC, "not a flop table: {}", path.display());
        let n = file.read_u32::<BE>()? as usize;
        anyhow::ensure!(n <= crate::N_ORDERED_FLOPS, "too many records: {}", n);
        let entries = (0..n)
            .map(|_| Self::record(file))
            .collect::<anyhow::Result<Vec<_>>>()?;
        anyhow::ensure!(file.read_u16::<BE>()? == TRAILER, "missing trailer");
        log::info!("{:<32}{:<32}", "loaded flop cache", entries.len());
        Ok(entries.into_iter().collect())
    }

    fn record(file: &mut impl Read) -> anyhow::Result<(Flop, Isomorphism)> {
        let flop = Self::flop(file)?;
        let canonical = Self::flop(file)?;
        let permutation = Permutation::try_from(file.read_u8()?)
            .map_err(|bits| anyhow::anyhow!("invalid permutation byte {:#04x}", bits))?;
        let isomorphism = Isomorphism::canonicalize(&flop);
        anyhow::ensure!(
            isomorphism.canonical() == canonical && isomorphism.permutation() == permutation,
            "inconsistent record for {}",
            flop
        );
        Ok((flop, isomorphism))
    }
    fn flop(file: &mut impl Read) -> anyhow::Result<Flop> {
        let ref mut bytes = [0u8; 3];
        file.read_exact(bytes)?;
        let cards = [
            Card::try_from(bytes[0])?,
            Card::try_from(bytes[1])?,
            Card::try_from(bytes[2])?,
        ];
        Ok(Flop::try_from(cards)?)
    }
    fn bytes(flop: &Flop) -> [u8; 3] {
        flop.cards().map(u8::from)
    }
}
