//! Die vier Himmelsrichtungen, aus denen eine Zelle befahren werden kann.

use std::ops::{Mul, MulAssign};

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use crate::drehung::Drehung;

/// Eine der vier Himmelsrichtungen.
///
/// Drehungen werden über [`Mul`] angewendet, zyklisch im Uhrzeigersinn:
/// `Himmelsrichtung::Norden * Drehung::Uhrzeigersinn90 == Himmelsrichtung::Osten`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
pub enum Himmelsrichtung {
    /// Norden, die Stamm-Richtung einer ungedrehten Weiche.
    Norden,
    /// Osten.
    Osten,
    /// Süden.
    Süden,
    /// Westen.
    Westen,
}

impl Himmelsrichtung {
    /// Anzahl der Viertel-Drehungen im Uhrzeigersinn von [`Norden`](Himmelsrichtung::Norden) aus.
    #[must_use]
    pub const fn viertel(self) -> u8 {
        match self {
            Himmelsrichtung::Norden => 0,
            Himmelsrichtung::Osten => 1,
            Himmelsrichtung::Süden => 2,
            Himmelsrichtung::Westen => 3,
        }
    }

    /// Himmelsrichtung aus einer Anzahl Viertel-Drehungen im Uhrzeigersinn von
    /// [`Norden`](Himmelsrichtung::Norden) aus, modulo einer vollen Umdrehung.
    #[must_use]
    pub const fn aus_vierteln(viertel: u8) -> Himmelsrichtung {
        // Konstanter Teiler, keine Division durch 0 möglich.
        #[allow(clippy::arithmetic_side_effects)]
        match viertel % 4 {
            0 => Himmelsrichtung::Norden,
            1 => Himmelsrichtung::Osten,
            2 => Himmelsrichtung::Süden,
            _ => Himmelsrichtung::Westen,
        }
    }

    /// Die entgegengesetzte Himmelsrichtung, d.h. um eine halbe Umdrehung gedreht.
    #[must_use]
    pub const fn gegenüber(self) -> Himmelsrichtung {
        match self {
            Himmelsrichtung::Norden => Himmelsrichtung::Süden,
            Himmelsrichtung::Osten => Himmelsrichtung::Westen,
            Himmelsrichtung::Süden => Himmelsrichtung::Norden,
            Himmelsrichtung::Westen => Himmelsrichtung::Osten,
        }
    }
}

impl MulAssign<Drehung> for Himmelsrichtung {
    fn mul_assign(&mut self, rhs: Drehung) {
        *self = Himmelsrichtung::aus_vierteln(self.viertel().wrapping_add(rhs.viertel()));
    }
}

impl Mul<Drehung> for Himmelsrichtung {
    type Output = Self;

    fn mul(mut self, drehung: Drehung) -> Self::Output {
        self *= drehung;
        self
    }
}

#[cfg(test)]
mod test {
    use enum_iterator::all;

    use gleisraster_test_util::{expect_eq, init_test_logging, Expectation};

    use crate::{drehung::Drehung, himmelsrichtung::Himmelsrichtung};

    #[test]
    fn drehen() -> Result<(), Expectation> {
        init_test_logging();

        expect_eq(Himmelsrichtung::Norden * Drehung::Uhrzeigersinn90, Himmelsrichtung::Osten)?;
        expect_eq(Himmelsrichtung::Osten * Drehung::Uhrzeigersinn90, Himmelsrichtung::Süden)?;
        expect_eq(Himmelsrichtung::Süden * Drehung::Uhrzeigersinn90, Himmelsrichtung::Westen)?;
        expect_eq(Himmelsrichtung::Westen * Drehung::Uhrzeigersinn90, Himmelsrichtung::Norden)?;
        expect_eq(Himmelsrichtung::Norden * Drehung::GEGEN_UHRZEIGERSINN_90, Himmelsrichtung::Westen)?;
        Ok(())
    }

    #[test]
    fn drehungs_gesetze() -> Result<(), Expectation> {
        init_test_logging();

        for richtung in all::<Himmelsrichtung>() {
            // neutrales Element
            expect_eq(richtung * Drehung::Keine, richtung)?;
            // halbe Umdrehung ist die Gegenrichtung
            expect_eq(richtung * Drehung::Uhrzeigersinn180, richtung.gegenüber())?;
            for drehung in all::<Drehung>() {
                // Drehung und ihr Inverses heben sich auf
                expect_eq((richtung * drehung) * -drehung, richtung)?;
                // zweimal 90° ist einmal 180°
                expect_eq(
                    (richtung * drehung) * drehung,
                    richtung * (drehung * drehung),
                )?;
            }
        }
        Ok(())
    }
}
