//! # 복소수 값 타입
//!
//! `Complex`는 `(real, imaginary)` 두 개의 `f64` 좌표를 갖는 불변 값입니다.
//! 모든 연산은 새 인스턴스를 반환하며, 원점 근처의 퇴화(0으로 나누기, `ln 0`, `0^n`)는
//! 별도의 검사 없이 IEEE-754 `NaN`/`inf` 규칙을 그대로 따릅니다.

use std::fmt;

mod ops;
mod parse;

#[cfg(test)]
mod __test__;

/// `real + imaginary·i`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    pub const I: Complex = Complex::new(0.0, 1.0);

    pub const fn new(real: f64, imaginary: f64) -> Self {
        Complex { real, imaginary }
    }

    /// 극좌표 `(magnitude, angle)`에서 직교 좌표로 변환
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Complex::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    // `Add` 구현은 이 메서드에 위임함
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Complex) -> Complex {
        Complex::new(self.real + other.real, self.imaginary + other.imaginary)
    }

    pub fn subtract(self, other: Complex) -> Complex {
        Complex::new(self.real - other.real, self.imaginary - other.imaginary)
    }

    pub fn multiply(self, other: Complex) -> Complex {
        let real = self.real * other.real - self.imaginary * other.imaginary;
        let imaginary = self.real * other.imaginary + self.imaginary * other.real;
        Complex::new(real, imaginary)
    }

    /// 복소수 나눗셈.
    ///
    /// 분모 `other.real² + other.imaginary²`가 0이면 결과 성분은 IEEE-754 나눗셈 규칙에 따라
    /// `NaN` 또는 `±inf`가 됩니다. 오류가 아니라 정의된 동작입니다.
    pub fn divide(self, other: Complex) -> Complex {
        let denominator = other.real * other.real + other.imaginary * other.imaginary;
        let real = (self.real * other.real + self.imaginary * other.imaginary) / denominator;
        let imaginary = (self.imaginary * other.real - self.real * other.imaginary) / denominator;
        Complex::new(real, imaginary)
    }

    /// 절댓값 `sqrt(re² + im²)`
    pub fn magnitude(self) -> f64 {
        (self.real * self.real + self.imaginary * self.imaginary).sqrt()
    }

    /// 편각 `atan2(im, re)`. 원점은 0으로 매핑됩니다.
    pub fn angle(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// 극형식 거듭제곱: `|a|^n`으로 스케일하고 `arg(a)·n`만큼 회전.
    ///
    /// 원점에서 `n < 0`이면 `0^n = inf`이므로 `NaN`/`inf` 성분이 나옵니다.
    /// `n = 0`이면 `powf(0, 0) = 1`에 따라 `1 + 0i`입니다.
    pub fn power(self, exponent: f64) -> Complex {
        let magnitude = self.magnitude().powf(exponent);
        let angle = self.angle() * exponent;
        Complex::from_polar(magnitude, angle)
    }

    pub fn conjugate(self) -> Complex {
        Complex::new(self.real, -self.imaginary)
    }

    /// 주 가지(principal branch) 자연로그 `(ln|a|, arg a)`
    pub fn logarithm(self) -> Complex {
        Complex::new(self.magnitude().ln(), self.angle())
    }

    pub fn sine(self) -> Complex {
        let real = self.real.sin() * self.imaginary.cosh();
        let imaginary = self.real.cos() * self.imaginary.sinh();
        Complex::new(real, imaginary)
    }

    pub fn cosine(self) -> Complex {
        let real = self.real.cos() * self.imaginary.cosh();
        let imaginary = -self.real.sin() * self.imaginary.sinh();
        Complex::new(real, imaginary)
    }

    /// `sine / cosine`. 코사인이 `0 + 0i`이면 `divide`의 퇴화 동작을 그대로 따릅니다.
    pub fn tangent(self) -> Complex {
        self.sine().divide(self.cosine())
    }
}

impl fmt::Display for Complex {
    /// `"<real> <+|-> <|imaginary|>i"` 형식. 허수부가 음수일 때만 `-`.
    ///
    /// 숫자는 `f64`의 `Display`를 그대로 사용하므로 지수 표기를 쓰지 않습니다:
    /// `1e21`은 `1000000000000000000000`, `1e-7`은 `0.0000001`로 출력됩니다.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.imaginary < 0.0 { '-' } else { '+' };
        write!(f, "{} {} {}i", self.real, sign, self.imaginary.abs())
    }
}
