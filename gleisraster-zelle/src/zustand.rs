//! Stellung der Zweige einer Weichen-Zelle.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Aktuelle Stellung einer Weichen-Zelle.
///
/// Für Zellen ohne Weichen-Geometrie wird der Zustand beim Befahren ignoriert.
/// [`KEINER`](Zustand::KEINER) und [`NULL`](Zustand::NULL) sind Aliase für die
/// [`Ruhe`](Zustand::Ruhe)-Stellung einer noch nie umgestellten Weiche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Sequence, Serialize, Deserialize)]
pub enum Zustand {
    /// Ruhestellung: bei Weichen mit gerader Durchfahrt die Durchfahrt,
    /// bei symmetrischen Weichen der linke Zweig.
    #[default]
    Ruhe,
    /// Der linke Zweig ist aktiv.
    LinkerZweig,
    /// Der rechte Zweig ist aktiv.
    RechterZweig,
}

impl Zustand {
    /// Alias für die [`Ruhe`](Zustand::Ruhe)-Stellung.
    pub const KEINER: Zustand = Zustand::Ruhe;
    /// Alias für die [`Ruhe`](Zustand::Ruhe)-Stellung.
    pub const NULL: Zustand = Zustand::Ruhe;

    /// Die Stellung nach einem Wechsel auf den jeweils anderen Zweig.
    ///
    /// Die [`Ruhe`](Zustand::Ruhe)-Stellung zählt dabei als "nicht der rechte Zweig"
    /// und wechselt auf [`RechterZweig`](Zustand::RechterZweig).
    #[must_use]
    pub const fn gewechselt(self) -> Zustand {
        match self {
            Zustand::Ruhe | Zustand::LinkerZweig => Zustand::RechterZweig,
            Zustand::RechterZweig => Zustand::LinkerZweig,
        }
    }
}

#[cfg(test)]
mod test {
    use gleisraster_test_util::{expect_eq, init_test_logging, Expectation};

    use crate::zustand::Zustand;

    #[test]
    fn aliase() -> Result<(), Expectation> {
        init_test_logging();

        expect_eq(Zustand::KEINER, Zustand::Ruhe)?;
        expect_eq(Zustand::NULL, Zustand::Ruhe)?;
        expect_eq(Zustand::default(), Zustand::Ruhe)?;
        Ok(())
    }

    #[test]
    fn wechseln() -> Result<(), Expectation> {
        init_test_logging();

        expect_eq(Zustand::Ruhe.gewechselt(), Zustand::RechterZweig)?;
        expect_eq(Zustand::LinkerZweig.gewechselt(), Zustand::RechterZweig)?;
        expect_eq(Zustand::RechterZweig.gewechselt(), Zustand::LinkerZweig)?;
        Ok(())
    }
}
