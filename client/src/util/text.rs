//! User-facing copy for the auth screen.
//!
//! The product ships in Korean; the generic failure fallback stays English.

pub const BRAND_PRIMARY: &str = "Pixel";
pub const BRAND_SECONDARY: &str = "Walls";
pub const BRAND_TAGLINE: &str = "AI Wallpaper Generator";

pub const LOGIN_LABEL: &str = "로그인";
pub const SIGN_UP_LABEL: &str = "회원가입";

pub const EMAIL_PLACEHOLDER: &str = "이메일";
pub const PASSWORD_PLACEHOLDER: &str = "비밀번호";
pub const SHOW_PASSWORD_LABEL: &str = "비밀번호 보기";
pub const HIDE_PASSWORD_LABEL: &str = "비밀번호 숨기기";

pub const NO_ACCOUNT_PROMPT: &str = "계정이 없으신가요? ";
pub const HAVE_ACCOUNT_PROMPT: &str = "이미 계정이 있으신가요? ";

pub const SIGN_UP_COMPLETE: &str = "회원가입 완료! 이메일을 확인해주세요.";
pub const FALLBACK_ERROR: &str = "An error occurred";

pub const EMAIL_REQUIRED: &str = "이메일을 입력해주세요.";
pub const PASSWORD_TOO_SHORT: &str = "비밀번호는 6자 이상이어야 합니다.";

pub const SIGNED_IN_AS: &str = "로그인됨: ";
pub const SIGN_OUT_LABEL: &str = "로그아웃";
