//! Interactive menu session.
//!
//! The session owns the roster for the whole run and writes it back after
//! every registration and every recorded score. It is generic over its
//! input and output so tests can script a whole conversation in memory.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use pim_core::catalog::{self, CATALOG};
use pim_core::quiz::{self, QuizOutcome};
use pim_core::statistics::{summarize, Mode};
use pim_core::{RegistrationError, Roster, Student};

/// One run of the menu-driven interface.
pub struct Session<R, W> {
    input: R,
    output: W,
    roster: Roster,
    data_path: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(roster: Roster, data_path: PathBuf, input: R, output: W) -> Self {
        Self {
            input,
            output,
            roster,
            data_path,
        }
    }

    /// Load the roster from `data_path`. A load error is reported to the user
    /// and the session continues with an empty roster.
    pub fn start(data_path: PathBuf, input: R, mut output: W) -> Result<Self> {
        let roster = match pim_core::load(&data_path) {
            Ok(roster) => roster,
            Err(e) => {
                tracing::error!("failed to load data: {e}");
                writeln!(output, "Erro ao carregar dados: {e}")?;
                Roster::new()
            }
        };
        Ok(Self::new(roster, data_path, input, output))
    }

    /// Consume the session, returning the roster and the output sink.
    #[cfg(test)]
    pub fn into_inner(self) -> (Roster, W) {
        (self.roster, self.output)
    }

    /// Print `label`, read one line and trim it. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn persist(&self) -> Result<()> {
        self.roster
            .save_to(&self.data_path)
            .context("failed to persist roster")
    }

    /// Main menu loop. Returns when the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("starting session with {} students", self.roster.len());

        loop {
            writeln!(self.output, "\n=== Plataforma de Revisão ===")?;
            writeln!(self.output, "1. Registro")?;
            writeln!(self.output, "2. Login")?;
            writeln!(self.output, "3. Encerrar")?;

            let Some(choice) = self.prompt("Escolha: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.register()?,
                "2" => {
                    if let Some(index) = self.login()? {
                        self.student_menu(index)?;
                    }
                }
                "3" => break,
                _ => writeln!(self.output, "Opção inválida.")?,
            }
        }

        tracing::info!("shutting down session");
        writeln!(self.output, "Encerrando...")?;
        Ok(())
    }

    /// Register a new student and persist the roster.
    pub fn register(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Registro de Aluno ===")?;

        let name = self.prompt("Nome: ")?.unwrap_or_default();
        if name.is_empty() {
            writeln!(self.output, "Erro: Nome não pode ser vazio.")?;
            return Ok(());
        }

        let email = self.prompt("Email: ")?.unwrap_or_default();
        if email.is_empty() {
            writeln!(self.output, "Erro: Email não pode ser vazio.")?;
            return Ok(());
        }
        if self.roster.find_by_email(&email).is_some() {
            writeln!(self.output, "Erro: Este email já está registrado.")?;
            return Ok(());
        }

        let secret = self.prompt("Senha: ")?.unwrap_or_default();
        if secret.is_empty() {
            writeln!(self.output, "Erro: Senha não pode ser vazia.")?;
            return Ok(());
        }

        match self.roster.register(Student::new(&name, &email, secret)) {
            Ok(_) => {}
            Err(RegistrationError::DuplicateEmail(_)) => {
                writeln!(self.output, "Erro: Este email já está registrado.")?;
                return Ok(());
            }
        }
        self.persist()?;

        tracing::info!("student registered: {name} ({email})");
        writeln!(self.output, "Aluno {name} registrado com sucesso!")?;
        Ok(())
    }

    /// Ask for credentials; the index of the authenticated student, if any.
    pub fn login(&mut self) -> Result<Option<usize>> {
        writeln!(self.output, "\n=== Login ===")?;
        let email = self.prompt("Email: ")?.unwrap_or_default();
        let secret = self.prompt("Senha: ")?.unwrap_or_default();

        match self.roster.authenticate(&email, &secret) {
            Some(index) => {
                let name = self.roster.get(index).map(|s| s.name.clone()).unwrap_or_default();
                tracing::info!("successful login: {name} ({email})");
                writeln!(self.output, "Bem-vindo(a), {name}!")?;
                Ok(Some(index))
            }
            None => {
                tracing::warn!("failed login attempt for email: {email}");
                writeln!(self.output, "Email ou senha incorretos.")?;
                Ok(None)
            }
        }
    }

    fn student_menu(&mut self, index: usize) -> Result<()> {
        loop {
            let name = self.roster.get(index).map(|s| s.name.clone()).unwrap_or_default();
            writeln!(self.output, "\n=== Menu de {name} ===")?;
            writeln!(self.output, "1. Revisar Conteúdos")?;
            writeln!(self.output, "2. Avaliação")?;
            writeln!(self.output, "3. Notas")?;
            writeln!(self.output, "4. Sair")?;

            let Some(choice) = self.prompt("Escolha: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.review_content()?,
                "2" => self.apply_assessment(index)?,
                "3" => self.show_grades(index)?,
                "4" => return Ok(()),
                _ => writeln!(self.output, "Opção inválida.")?,
            }
        }
    }

    /// Print every discipline's review text, pausing after each.
    pub fn review_content(&mut self) -> Result<()> {
        for discipline in &CATALOG {
            writeln!(self.output, "\n{}:\n{}", discipline.name, discipline.review)?;
            if self.prompt("Pressione Enter para continuar")?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Ask every question of `discipline` and grade the answers.
    pub fn take_quiz(&mut self, discipline: &str) -> Result<QuizOutcome> {
        writeln!(self.output, "\nIniciando avaliação de {discipline}...")?;

        let questions = catalog::questions(discipline);
        if questions.is_empty() {
            tracing::warn!("no questions found for discipline: {discipline}");
            return Ok(QuizOutcome::new(0, 0));
        }

        let mut answers = Vec::with_capacity(questions.len());
        for question in questions {
            writeln!(self.output, "\n{}", question.prompt)?;
            for option in &question.options {
                writeln!(self.output, "{option}")?;
            }
            answers.push(self.prompt("Escolha (A, B, C, D): ")?.unwrap_or_default());
        }

        let outcome = quiz::grade(questions, &answers);
        tracing::info!(
            "quiz completed for {discipline}: {}/{} = {:.1}",
            outcome.correct,
            outcome.total,
            outcome.score
        );
        Ok(outcome)
    }

    /// Let the student pick a discipline, run its quiz and record the score.
    pub fn apply_assessment(&mut self, index: usize) -> Result<()> {
        writeln!(self.output, "\n=== Avaliação ===")?;
        for (i, discipline) in catalog::DISCIPLINES.iter().enumerate() {
            writeln!(self.output, "{}. {discipline}", i + 1)?;
        }

        let choice = self.prompt("Escolha a disciplina: ")?.unwrap_or_default();
        // Plain digits only; `parse` alone would also take "+8".
        let number = choice
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| choice.parse::<usize>().ok())
            .flatten();
        let discipline = match number {
            Some(n) if (1..=catalog::DISCIPLINES.len()).contains(&n) => catalog::DISCIPLINES[n - 1],
            _ => {
                writeln!(self.output, "Opção inválida.")?;
                return Ok(());
            }
        };

        if catalog::questions(discipline).is_empty() {
            writeln!(self.output, "Esta disciplina ainda não possui avaliação.")?;
            return Ok(());
        }

        let outcome = self.take_quiz(discipline)?;
        if !self.roster.record_score(index, discipline, outcome.score) {
            anyhow::bail!("no student at roster index {index}");
        }
        self.persist()?;

        if let Some(student) = self.roster.get(index) {
            tracing::info!(
                "grade {:.1} recorded for {} in {discipline}",
                outcome.score,
                student.name
            );
        }
        writeln!(
            self.output,
            "Nota {:.1} registrada em {discipline}.",
            outcome.score
        )?;
        Ok(())
    }

    /// Print scores and statistics for every discipline.
    pub fn show_grades(&mut self, index: usize) -> Result<()> {
        let Some(student) = self.roster.get(index) else {
            anyhow::bail!("no student at roster index {index}");
        };

        writeln!(self.output, "\n=== Notas de {} ===", student.name)?;
        for row in summarize(student) {
            let Some(summary) = row.summary else {
                writeln!(self.output, "{}: Sem notas", row.discipline)?;
                continue;
            };

            writeln!(self.output, "\n{}: {:?}", row.discipline, row.scores)?;
            writeln!(
                self.output,
                "  Média: {:.2} -> Indica o desempenho geral ao longo das autoavaliações",
                summary.mean
            )?;
            writeln!(
                self.output,
                "  Mediana: {:.2} -> Representa o valor central das pontuações",
                summary.median
            )?;
            match summary.mode {
                Mode::Undefined => {
                    writeln!(self.output, "  Moda: Não definida (valores únicos)")?
                }
                mode => writeln!(
                    self.output,
                    "  Moda: {mode} -> Valor mais frequente entre as avaliações"
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const MATH: &str = "Matemática e Estatística";

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn session(roster: Roster, data_path: PathBuf, script: &str) -> TestSession {
        Session::new(roster, data_path, Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(session: TestSession) -> (Roster, String) {
        let (roster, out) = session.into_inner();
        (roster, String::from_utf8(out).unwrap())
    }

    fn student_with(scores: &[f64]) -> Roster {
        let mut student = Student::new("Test", "test@example.com", "pass");
        for &s in scores {
            student.push_score(MATH, s);
        }
        Roster::from_students(vec![student])
    }

    #[test]
    fn register_success_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alunos.json");
        let script = "Test User\ntest@example.com\npassword123\n";
        let mut s = session(Roster::new(), path.clone(), script);

        s.register().unwrap();

        let (roster, out) = output(s);
        assert_eq!(roster.len(), 1);
        let student = roster.get(0).unwrap();
        assert_eq!(student.name, "Test User");
        assert_eq!(student.email, "test@example.com");
        assert_eq!(student.secret, "password123");
        assert!(out.contains("Aluno Test User registrado com sucesso!"));
        assert_eq!(pim_core::load(&path).unwrap(), roster);
    }

    #[test]
    fn register_empty_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alunos.json");
        let mut s = session(Roster::new(), path.clone(), "\ntest@example.com\npassword123\n");

        s.register().unwrap();

        let (roster, out) = output(s);
        assert!(roster.is_empty());
        assert!(out.contains("Erro: Nome não pode ser vazio."));
        assert!(!path.exists());
    }

    #[test]
    fn register_duplicate_email_fails() {
        let dir = tempfile::tempdir().unwrap();
        let roster =
            Roster::from_students(vec![Student::new("Existing", "test@example.com", "pass")]);
        let script = "New User\ntest@example.com\nnewpass\n";
        let mut s = session(roster, dir.path().join("a.json"), script);

        s.register().unwrap();

        let (roster, out) = output(s);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).unwrap().name, "Existing");
        assert!(out.contains("Erro: Este email já está registrado."));
    }

    #[test]
    fn login_checks_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let script = "test@example.com\nwrong\ntest@example.com\npass\n";
        let mut s = session(student_with(&[]), dir.path().join("a.json"), script);

        assert_eq!(s.login().unwrap(), None);
        assert_eq!(s.login().unwrap(), Some(0));

        let (_, out) = output(s);
        assert!(out.contains("Email ou senha incorretos."));
        assert!(out.contains("Bem-vindo(a), Test!"));
    }

    #[test]
    fn quiz_all_correct() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(Roster::new(), dir.path().join("a.json"), &"A\n".repeat(10));
        let outcome = s.take_quiz(MATH).unwrap();
        assert_eq!(outcome.score, 10.0);
    }

    #[test]
    fn quiz_all_wrong() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(Roster::new(), dir.path().join("a.json"), &"Z\n".repeat(10));
        assert_eq!(s.take_quiz(MATH).unwrap().score, 0.0);
    }

    #[test]
    fn quiz_partial_and_lowercase() {
        let dir = tempfile::tempdir().unwrap();
        let script = "a\na\n A \na\na\nz\nz\nz\nz\nz\n";
        let mut s = session(Roster::new(), dir.path().join("a.json"), script);
        assert_eq!(s.take_quiz(MATH).unwrap().score, 5.0);
    }

    #[test]
    fn quiz_unknown_discipline_scores_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(Roster::new(), dir.path().join("a.json"), "A\n");
        assert_eq!(s.take_quiz("Disciplina Inexistente").unwrap().score, 0.0);
    }

    #[test]
    fn assessment_records_and_persists_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alunos.json");
        let script = format!("8\n{}", "A\n".repeat(10));
        let mut s = session(student_with(&[]), path.clone(), &script);

        s.apply_assessment(0).unwrap();

        let (roster, out) = output(s);
        assert_eq!(roster.get(0).unwrap().scores_for(MATH), &[10.0]);
        assert!(out.contains("Nota 10.0 registrada em Matemática e Estatística."));
        let saved = pim_core::load(&path).unwrap();
        assert_eq!(saved.get(0).unwrap().scores_for(MATH), &[10.0]);
    }

    #[test]
    fn assessment_rejects_bad_choice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alunos.json");
        let mut s = session(student_with(&[]), path.clone(), "9\n");

        s.apply_assessment(0).unwrap();

        let (roster, out) = output(s);
        assert!(out.contains("Opção inválida."));
        assert!(!roster.get(0).unwrap().has_scores());
        assert!(!path.exists());
    }

    #[test]
    fn assessment_requires_plain_digits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alunos.json");

        for choice in ["+8", " 8x", "-1", ""] {
            let script = format!("{choice}\n{}", "A\n".repeat(10));
            let mut s = session(student_with(&[]), path.clone(), &script);

            s.apply_assessment(0).unwrap();

            let (roster, out) = output(s);
            assert!(out.contains("Opção inválida."), "accepted {choice:?}");
            assert!(!roster.get(0).unwrap().has_scores());
        }
        assert!(!path.exists());
    }

    #[test]
    fn grades_with_scores() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(student_with(&[7.0, 8.0, 9.0]), dir.path().join("a.json"), "");

        s.show_grades(0).unwrap();

        let (_, out) = output(s);
        assert!(out.contains("Notas de Test"));
        assert!(out.contains("[7.0, 8.0, 9.0]"));
        assert!(out.contains("Média: 8.00"));
        assert!(out.contains("Mediana: 8.00"));
        assert!(out.contains("Moda: Não definida"));
    }

    #[test]
    fn grades_without_scores() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(student_with(&[]), dir.path().join("a.json"), "");

        s.show_grades(0).unwrap();

        let (_, out) = output(s);
        assert!(out.contains("Notas de Test"));
        assert!(out.contains("TIC: Sem notas"));
    }

    #[test]
    fn grades_show_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(student_with(&[7.0, 7.0, 8.0]), dir.path().join("a.json"), "");

        s.show_grades(0).unwrap();

        let (_, out) = output(s);
        assert!(out.contains("Moda: 7.0"));
    }

    #[test]
    fn start_degrades_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alunos.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let s = Session::start(path, Cursor::new(Vec::new()), Vec::new()).unwrap();

        let (roster, out) = s.into_inner();
        assert!(roster.is_empty());
        assert!(String::from_utf8(out).unwrap().contains("Erro ao carregar dados"));
    }

    #[test]
    fn full_run_register_login_quiz_grades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alunos.json");
        let script = format!(
            "1\nAna\nana@example.com\nsecret\n2\nana@example.com\nsecret\n2\n8\n{}3\n4\n3\n",
            "A\n".repeat(10)
        );
        let mut s = session(Roster::new(), path.clone(), &script);

        s.run().unwrap();

        let (roster, out) = output(s);
        assert_eq!(roster.get(0).unwrap().scores_for(MATH), &[10.0]);
        assert!(out.contains("Média: 10.00"));
        assert!(out.contains("Encerrando..."));
        assert_eq!(pim_core::load(&path).unwrap(), roster);
    }

    #[test]
    fn run_ends_at_end_of_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(Roster::new(), dir.path().join("a.json"), "x\n");

        s.run().unwrap();

        let (_, out) = output(s);
        assert!(out.contains("Opção inválida."));
        assert!(out.contains("Encerrando..."));
    }

    #[test]
    fn save_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut s = session(Roster::new(), blocker.join("alunos.json"), "Ana\nana@x\npw\n");

        let err = s.register().unwrap_err();
        assert!(format!("{err:#}").contains("failed to persist roster"));
    }
}
