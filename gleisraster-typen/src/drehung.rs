//! Drehung einer Zelle in Viertel-Schritten im Uhrzeigersinn.

use std::ops::{Mul, MulAssign, Neg};

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Drehung in Viertel-Schritten, normalisiert auf den Bereich [0°, 360°).
///
/// Gleichheit vergleicht den normalisierten Winkel im Uhrzeigersinn:
/// die Konstanten gegen den Uhrzeigersinn sind Aliase für die vier kanonischen Varianten,
/// z.B. `Drehung::GEGEN_UHRZEIGERSINN_90 == Drehung::Uhrzeigersinn270`.
///
/// Die Komposition über [`Mul`] ist Addition modulo 360° und bildet eine kommutative Gruppe
/// mit [`Keine`](Drehung::Keine) als neutralem und [`Neg`] als inversem Element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Sequence, Serialize, Deserialize)]
pub enum Drehung {
    /// Keine Drehung.
    #[default]
    Keine,
    /// Viertel-Drehung (90°) im Uhrzeigersinn.
    Uhrzeigersinn90,
    /// Halbe Drehung (180°).
    Uhrzeigersinn180,
    /// Dreiviertel-Drehung (270°) im Uhrzeigersinn.
    Uhrzeigersinn270,
}

impl Drehung {
    /// Volle Drehung im Uhrzeigersinn, äquivalent zu [`Keine`](Drehung::Keine).
    pub const UHRZEIGERSINN_360: Drehung = Drehung::Keine;
    /// Viertel-Drehung gegen den Uhrzeigersinn.
    pub const GEGEN_UHRZEIGERSINN_90: Drehung = Drehung::Uhrzeigersinn270;
    /// Halbe Drehung gegen den Uhrzeigersinn.
    pub const GEGEN_UHRZEIGERSINN_180: Drehung = Drehung::Uhrzeigersinn180;
    /// Dreiviertel-Drehung gegen den Uhrzeigersinn.
    pub const GEGEN_UHRZEIGERSINN_270: Drehung = Drehung::Uhrzeigersinn90;
    /// Volle Drehung gegen den Uhrzeigersinn, äquivalent zu [`Keine`](Drehung::Keine).
    pub const GEGEN_UHRZEIGERSINN_360: Drehung = Drehung::Keine;

    /// Anzahl der Viertel-Drehungen im Uhrzeigersinn (0-3).
    #[must_use]
    pub const fn viertel(self) -> u8 {
        match self {
            Drehung::Keine => 0,
            Drehung::Uhrzeigersinn90 => 1,
            Drehung::Uhrzeigersinn180 => 2,
            Drehung::Uhrzeigersinn270 => 3,
        }
    }

    /// Drehung aus einer Anzahl Viertel-Drehungen im Uhrzeigersinn, modulo einer vollen Umdrehung.
    #[must_use]
    pub const fn aus_vierteln(viertel: u8) -> Drehung {
        // Konstanter Teiler, keine Division durch 0 möglich.
        #[allow(clippy::arithmetic_side_effects)]
        match viertel % 4 {
            0 => Drehung::Keine,
            1 => Drehung::Uhrzeigersinn90,
            2 => Drehung::Uhrzeigersinn180,
            _ => Drehung::Uhrzeigersinn270,
        }
    }

    /// Der normalisierte Winkel im Uhrzeigersinn \[Gradmaß\] (0, 90, 180, 270).
    #[must_use]
    pub const fn gradmaß(self) -> u16 {
        match self {
            Drehung::Keine => 0,
            Drehung::Uhrzeigersinn90 => 90,
            Drehung::Uhrzeigersinn180 => 180,
            Drehung::Uhrzeigersinn270 => 270,
        }
    }
}

impl MulAssign<Drehung> for Drehung {
    fn mul_assign(&mut self, rhs: Drehung) {
        *self = Drehung::aus_vierteln(self.viertel().wrapping_add(rhs.viertel()));
    }
}

impl Mul<Drehung> for Drehung {
    type Output = Self;

    fn mul(mut self, other: Drehung) -> Self::Output {
        self *= other;
        self
    }
}

impl Neg for Drehung {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Drehung::aus_vierteln(4_u8.wrapping_sub(self.viertel()))
    }
}

#[cfg(test)]
mod test {
    use enum_iterator::all;

    use gleisraster_test_util::{expect_eq, init_test_logging, Expectation};

    use crate::drehung::Drehung;

    #[test]
    fn aliase() -> Result<(), Expectation> {
        init_test_logging();

        // Gleichheit ist über den normalisierten Winkel im Uhrzeigersinn definiert,
        // nicht über den Namen der Konstante.
        expect_eq(Drehung::UHRZEIGERSINN_360, Drehung::Keine)?;
        expect_eq(Drehung::GEGEN_UHRZEIGERSINN_360, Drehung::Keine)?;
        expect_eq(Drehung::GEGEN_UHRZEIGERSINN_90, Drehung::Uhrzeigersinn270)?;
        expect_eq(Drehung::GEGEN_UHRZEIGERSINN_180, Drehung::Uhrzeigersinn180)?;
        expect_eq(Drehung::GEGEN_UHRZEIGERSINN_270, Drehung::Uhrzeigersinn90)?;
        expect_eq(Drehung::default(), Drehung::Keine)?;
        Ok(())
    }

    #[test]
    fn gradmaß_normalisiert() -> Result<(), Expectation> {
        init_test_logging();

        expect_eq(Drehung::Keine.gradmaß(), 0)?;
        expect_eq(Drehung::Uhrzeigersinn90.gradmaß(), 90)?;
        expect_eq(Drehung::GEGEN_UHRZEIGERSINN_90.gradmaß(), 270)?;
        expect_eq(Drehung::aus_vierteln(7), Drehung::Uhrzeigersinn270)?;
        Ok(())
    }

    #[test]
    fn komposition() -> Result<(), Expectation> {
        init_test_logging();

        expect_eq(Drehung::Uhrzeigersinn90 * Drehung::Uhrzeigersinn90, Drehung::Uhrzeigersinn180)?;
        expect_eq(Drehung::Uhrzeigersinn90 * Drehung::GEGEN_UHRZEIGERSINN_90, Drehung::Keine)?;
        expect_eq(Drehung::Uhrzeigersinn180 * Drehung::Uhrzeigersinn270, Drehung::Uhrzeigersinn90)?;
        Ok(())
    }

    #[test]
    fn gruppen_gesetze() -> Result<(), Expectation> {
        init_test_logging();

        for drehung in all::<Drehung>() {
            // neutrales Element
            expect_eq(drehung * Drehung::Keine, drehung)?;
            expect_eq(Drehung::Keine * drehung, drehung)?;
            // inverses Element
            expect_eq(drehung * -drehung, Drehung::Keine)?;
            for andere in all::<Drehung>() {
                // Kommutativität
                expect_eq(drehung * andere, andere * drehung)?;
                for dritte in all::<Drehung>() {
                    // Assoziativität
                    expect_eq((drehung * andere) * dritte, drehung * (andere * dritte))?;
                }
            }
        }
        Ok(())
    }
}
